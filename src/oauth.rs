//! LinkedIn OAuth 2.0 wire types: the browser authorization redirect and the
//! token endpoint payloads.

pub use oauth2;

// crates.io
use oauth2::{
	AuthUrl, AuthorizationCode, ClientSecret, CsrfToken, RedirectUrl, Scope, basic::BasicClient,
};
// self
use crate::{_prelude::*, auth::TokenSecret, config::LinkedInConfig};

/// Authorization redirect issued to the browser.
#[derive(Clone, Debug)]
pub struct AuthorizationRequest {
	/// Fully-formed authorize URL the browser should be sent to.
	pub authorize_url: Url,
	/// CSRF nonce that must round-trip via the callback.
	pub state: String,
}
impl AuthorizationRequest {
	/// Builds the authorize URL with a fresh random nonce.
	pub fn new(config: &LinkedInConfig) -> Self {
		Self::with_state(config, CsrfToken::new_random())
	}

	/// Builds the authorize URL around a caller-chosen nonce.
	pub fn with_state(config: &LinkedInConfig, state: CsrfToken) -> Self {
		let client = BasicClient::new(config.client_id.clone())
			.set_auth_uri(AuthUrl::from_url(config.authorization_endpoint.clone()))
			.set_redirect_uri(RedirectUrl::from_url(config.redirect_uri.clone()));
		let (authorize_url, state) = client
			.authorize_url(|| state)
			.add_scopes(config.scopes.iter().cloned().map(Scope::new))
			.url();

		Self { authorize_url, state: state.secret().to_owned() }
	}
}

/// Token endpoint payload. LinkedIn omits `token_type`.
#[derive(Clone, Serialize, Deserialize)]
pub struct TokenResponse {
	/// Bearer token.
	pub access_token: TokenSecret,
	/// Lifetime in seconds.
	pub expires_in: i64,
	/// Refresh token, when the application is entitled to one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<TokenSecret>,
	/// Refresh token lifetime in seconds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refresh_token_expires_in: Option<i64>,
	/// Granted scopes.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scope: Option<String>,
}
impl Debug for TokenResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenResponse")
			.field("access_token", &"<redacted>")
			.field("expires_in", &self.expires_in)
			.field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
			.field("refresh_token_expires_in", &self.refresh_token_expires_in)
			.field("scope", &self.scope)
			.finish()
	}
}

/// Form body for the `authorization_code` grant, sending credentials in the body.
pub(crate) fn token_request_form<'a>(
	config: &'a LinkedInConfig,
	code: &'a AuthorizationCode,
	secret: &'a ClientSecret,
) -> [(&'static str, &'a str); 5] {
	[
		("grant_type", "authorization_code"),
		("code", code.secret().as_str()),
		("client_id", config.client_id.as_str()),
		("client_secret", secret.secret().as_str()),
		("redirect_uri", config.redirect_uri.as_str()),
	]
}
