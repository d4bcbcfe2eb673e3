//! Per-browser login state persisted through `tower-sessions`.

// crates.io
use tower_sessions::Session;
// self
use crate::{
	_prelude::*,
	auth::{TokenGrant, TokenSecret},
	model::Profile,
};

/// Key the login state is stored under inside the session record.
pub const SESSION_KEY: &str = "linkedin";

/// Outcome of checking a session before a gated request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
	/// A token is present and unexpired.
	Allow(TokenSecret),
	/// No token was ever stored.
	MissingToken,
	/// A token is stored but its expiry has passed or is unknown.
	Expired,
}

/// Login state kept per browser session.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
	/// Bearer token issued to this session.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub access_token: Option<TokenSecret>,
	/// Absolute expiry of [`Self::access_token`].
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub access_token_expiry: Option<OffsetDateTime>,
	/// CSRF nonce issued with the last authorization redirect.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub oauth_state: Option<String>,
	/// Profile captured when the session logged in.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user: Option<Profile>,
}
impl SessionData {
	/// Loads the login state, defaulting to an empty record.
	pub async fn load(session: &Session) -> Result<Self> {
		Ok(session.get::<Self>(SESSION_KEY).await?.unwrap_or_default())
	}

	/// Persists the login state.
	pub async fn store(&self, session: &Session) -> Result<()> {
		session.insert(SESSION_KEY, self).await?;

		Ok(())
	}

	/// Returns `true` when `returned` equals the stored nonce. A missing nonce never matches.
	pub fn state_matches(&self, returned: Option<&str>) -> bool {
		match (self.oauth_state.as_deref(), returned) {
			(Some(expected), Some(returned)) => !expected.is_empty() && expected == returned,
			_ => false,
		}
	}

	/// Records a successful login and consumes the CSRF nonce.
	pub fn establish(&mut self, grant: &TokenGrant, user: Profile) {
		self.access_token = Some(grant.access_token().clone());
		self.access_token_expiry = Some(grant.expires_at);
		self.oauth_state = None;
		self.user = Some(user);
	}

	/// `true` when a token is present and `now` is strictly before its expiry.
	pub fn is_access_token_valid_at(&self, now: OffsetDateTime) -> bool {
		match (&self.access_token, self.access_token_expiry) {
			(Some(_), Some(expiry)) => now < expiry,
			_ => false,
		}
	}

	/// Same as [`Self::is_access_token_valid_at`] using the current UTC clock.
	pub fn is_access_token_valid(&self) -> bool {
		self.is_access_token_valid_at(OffsetDateTime::now_utc())
	}

	/// Classifies the session for the request gate.
	pub fn gate_at(&self, now: OffsetDateTime) -> GateDecision {
		match &self.access_token {
			None => GateDecision::MissingToken,
			Some(token) if token.is_blank() => GateDecision::MissingToken,
			Some(token) if self.is_access_token_valid_at(now) => GateDecision::Allow(token.clone()),
			Some(_) => GateDecision::Expired,
		}
	}
}
