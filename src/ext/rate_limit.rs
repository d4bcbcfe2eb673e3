//! Rate limit policy contracts for the outbound LinkedIn transport.
//!
//! Policies delay callers until capacity is available; they never reject a call.

// std
use std::num::NonZeroU32;
// crates.io
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
// self
use crate::{_prelude::*, error::ConfigError, obs::UpstreamCall};

/// Boxed future returned by [`RateLimitPolicy::acquire`].
pub type RateLimitFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a + Send>>;

/// Strategy that admits outbound calls against a shared budget.
pub trait RateLimitPolicy
where
	Self: Send + Sync,
{
	/// Resolves once the call described by `context` may be dispatched.
	fn acquire(&self, context: &RateLimitContext) -> RateLimitFuture<'_>;
}

/// Context shared with a [`RateLimitPolicy`] before an outbound call is made.
#[derive(Clone, Copy, Debug)]
pub struct RateLimitContext {
	/// Logical upstream call being attempted.
	pub call: UpstreamCall,
}
impl RateLimitContext {
	/// Creates a new context for the given call.
	pub fn new(call: UpstreamCall) -> Self {
		Self { call }
	}
}

/// Token bucket admitting a fixed number of calls per second across the whole process.
pub struct GovernorRateLimit {
	limiter: DefaultDirectRateLimiter,
	per_second: NonZeroU32,
}
impl GovernorRateLimit {
	/// Builds a limiter admitting `per_second` calls each second.
	pub fn per_second(per_second: u32) -> Result<Self, ConfigError> {
		let per_second = NonZeroU32::new(per_second).ok_or(ConfigError::ZeroRateLimit)?;

		Ok(Self { limiter: RateLimiter::direct(Quota::per_second(per_second)), per_second })
	}

	/// Configured calls per second.
	pub fn rate(&self) -> u32 {
		self.per_second.get()
	}
}
impl RateLimitPolicy for GovernorRateLimit {
	fn acquire(&self, context: &RateLimitContext) -> RateLimitFuture<'_> {
		let call = context.call;

		Box::pin(async move {
			if self.limiter.check().is_err() {
				tracing::debug!(call = call.as_str(), "Rate limit reached, delaying LinkedIn call.");

				self.limiter.until_ready().await;
			}
		})
	}
}

/// Policy that admits every call immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unlimited;
impl RateLimitPolicy for Unlimited {
	fn acquire(&self, _: &RateLimitContext) -> RateLimitFuture<'_> {
		Box::pin(async {})
	}
}
