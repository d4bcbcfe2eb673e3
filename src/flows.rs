//! High-level LinkedIn operations built on the rate-limited transport.

mod jobs;
mod profile;
mod token_exchange;

pub use jobs::*;

// self
use crate::{
	_prelude::*,
	config::LinkedInConfig,
	http::LinkedInHttpClient,
	oauth::AuthorizationRequest,
};

/// LinkedIn API client shared by every request handler.
///
/// The client holds no per-user credentials: bearer tokens are passed in by the caller,
/// which keeps them scoped to the browser session that obtained them. All outbound calls
/// share one [`LinkedInHttpClient`] and therefore one rate limit.
#[derive(Clone, Debug)]
pub struct LinkedInClient {
	/// HTTP client wrapper used for every outbound LinkedIn request.
	pub http_client: LinkedInHttpClient,
	/// Credentials and endpoints.
	pub config: Arc<LinkedInConfig>,
}
impl LinkedInClient {
	/// Creates a client whose transport admits `config.rate_limit_per_second` calls per second.
	pub fn new(config: LinkedInConfig) -> Result<Self> {
		let http_client = LinkedInHttpClient::with_rate(config.rate_limit_per_second)?;

		Ok(Self::with_http_client(config, http_client))
	}

	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(config: LinkedInConfig, http_client: LinkedInHttpClient) -> Self {
		Self { http_client, config: Arc::new(config) }
	}

	/// Builds the browser redirect that starts a login, with a fresh CSRF nonce.
	pub fn start_authorization(&self) -> AuthorizationRequest {
		AuthorizationRequest::new(&self.config)
	}
}
