//! Extension contracts the LinkedIn transport consults before each outbound call.
//!
//! The default policy is a process-wide token bucket backed by `governor`; callers
//! can supply their own [`RateLimitPolicy`] when embedding the client elsewhere.

pub mod rate_limit;

pub use rate_limit::*;
