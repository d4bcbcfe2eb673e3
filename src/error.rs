//! Crate-level error types shared across flows, the transport, and configuration.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Session storage failed to load or persist state.
	#[error("Session store failure: {0}.")]
	Session(#[from] tower_sessions::session::Error),

	/// Neither the caller nor the session supplied a bearer token.
	#[error("Access token is required to call the LinkedIn API.")]
	MissingToken,
	/// Authorization code exchange failed, including the secondary-secret retry.
	#[error("Failed to obtain LinkedIn access token.")]
	TokenExchange(#[source] UpstreamError),
	/// Either of the profile calls failed.
	#[error("Failed to fetch LinkedIn profile.")]
	ProfileFetch(#[source] UpstreamError),
	/// Job search call failed.
	#[error("Failed to search for jobs on LinkedIn.")]
	JobSearch(#[source] UpstreamError),
	/// Job detail call failed.
	#[error("Failed to fetch job details.")]
	JobDetail(#[source] UpstreamError),
}
impl Error {
	/// Returns the upstream failure behind this error, if any.
	pub fn upstream(&self) -> Option<&UpstreamError> {
		match self {
			Self::TokenExchange(e) | Self::ProfileFetch(e) | Self::JobSearch(e) | Self::JobDetail(e) =>
				Some(e),
			_ => None,
		}
	}

	/// HTTP status reported by LinkedIn, when the failure carried one.
	pub fn upstream_status(&self) -> Option<u16> {
		self.upstream().and_then(UpstreamError::status)
	}
}

/// Configuration and validation failures raised while assembling the service.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Configured URL cannot be parsed or combined with an endpoint path.
	#[error("Configured URL `{name}` is invalid.")]
	InvalidUrl {
		/// Setting name the URL came from.
		name: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},

	/// A required environment variable is missing or empty.
	#[error("Environment variable `{name}` is required.")]
	MissingVar {
		/// Variable name.
		name: &'static str,
	},
	/// An environment variable holds a value that cannot be used.
	#[error("Environment variable `{name}` is invalid: {reason}.")]
	InvalidVar {
		/// Variable name.
		name: &'static str,
		/// Human-readable reason.
		reason: String,
	},
	/// Rate limit must admit at least one request per second.
	#[error("Rate limit must allow at least one request per second.")]
	ZeroRateLimit,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Failures observed while talking to LinkedIn.
#[derive(Debug, ThisError)]
pub enum UpstreamError {
	/// LinkedIn answered with a non-success status.
	#[error("LinkedIn responded with HTTP {status}.")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Truncated response body, when one was returned.
		body_preview: Option<String>,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// LinkedIn answered with a body that does not match the expected shape.
	#[error("LinkedIn returned malformed JSON.")]
	Parse {
		/// Structured parsing failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::error::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Network-level failure (DNS, TCP, TLS, body read).
	#[error("Network error occurred while calling LinkedIn.")]
	Transport {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Endpoint URL could not be assembled from the configured base.
	#[error("LinkedIn endpoint URL is invalid.")]
	InvalidUrl(#[from] url::ParseError),
	/// Token endpoint returned a non-positive lifetime.
	#[error("The expires_in value must be positive.")]
	NonPositiveExpiresIn,
}
impl UpstreamError {
	/// Wraps a transport-specific network error.
	pub fn transport(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Transport { source: Box::new(src) }
	}

	/// HTTP status associated with the failure, when one was observed.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			Self::Parse { status, .. } => *status,
			_ => None,
		}
	}
}
impl From<ReqwestError> for UpstreamError {
	fn from(e: ReqwestError) -> Self {
		Self::transport(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn upstream_status_is_exposed_through_the_wrapping_error() {
		let err = Error::JobDetail(UpstreamError::Status {
			status: 404,
			body_preview: None,
			retry_after: None,
		});

		assert_eq!(err.upstream_status(), Some(404));
		assert!(Error::MissingToken.upstream().is_none());
	}

	#[test]
	fn wrapped_upstream_error_is_the_source() {
		let err = Error::TokenExchange(UpstreamError::NonPositiveExpiresIn);
		let source = StdError::source(&err).expect("Token exchange error should expose a source.");

		assert_eq!(source.to_string(), "The expires_in value must be positive.");
		assert_eq!(err.to_string(), "Failed to obtain LinkedIn access token.");
	}
}
