//! Observability helpers for outbound LinkedIn calls.
//!
//! # Feature Flags
//!
//! - Spans named `linkedin_job_proxy.call` with the `call` and `stage` fields are always emitted
//!   through `tracing`.
//! - Enable `metrics` to increment the `linkedin_job_proxy_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// LinkedIn calls observed by the proxy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpstreamCall {
	/// Authorization code exchange at the token endpoint.
	TokenExchange,
	/// Profile and primary email lookups.
	Profile,
	/// Job search.
	JobSearch,
	/// Single job lookup.
	JobDetail,
}
impl UpstreamCall {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			UpstreamCall::TokenExchange => "token_exchange",
			UpstreamCall::Profile => "profile",
			UpstreamCall::JobSearch => "job_search",
			UpstreamCall::JobDetail => "job_detail",
		}
	}
}
impl Display for UpstreamCall {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}

	/// Maps a finished result onto its terminal outcome.
	pub fn of<T, E>(result: &Result<T, E>) -> Self {
		if result.is_ok() { CallOutcome::Success } else { CallOutcome::Failure }
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
