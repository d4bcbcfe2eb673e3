//! Login, OAuth callback, logout, and current-user handlers.

// crates.io
use axum::{
	Json,
	extract::{Query, State},
	response::Redirect,
};
use tower_sessions::Session;
// self
use crate::{
	_prelude::*,
	auth::SessionData,
	model::Profile,
	server::{ApiError, ApiResult, AppState, UNAUTHORIZED_MESSAGE},
};

const AUTH_FAILED: &str = "Authentication failed";
const SESSION_FAILED: &str = "Something went wrong!";

/// Query string LinkedIn appends to the callback URL.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CallbackQuery {
	/// Authorization code.
	pub code: Option<String>,
	/// CSRF nonce echoed back.
	pub state: Option<String>,
	/// OAuth error code when the member declined or the request was invalid.
	pub error: Option<String>,
	/// Human-readable OAuth error.
	pub error_description: Option<String>,
}

/// Stores a fresh CSRF nonce in the session and redirects to LinkedIn.
pub async fn login(State(state): State<AppState>, session: Session) -> ApiResult<Redirect> {
	let authorization = state.linkedin.start_authorization();
	let mut data = SessionData::load(&session)
		.await
		.map_err(|e| state.internal_error(SESSION_FAILED, e))?;

	data.oauth_state = Some(authorization.state);
	data.store(&session).await.map_err(|e| state.internal_error(SESSION_FAILED, e))?;

	Ok(Redirect::to(authorization.authorize_url.as_str()))
}

/// Validates the callback, exchanges the code, and establishes the session.
///
/// The session is written only after the exchange and the profile lookup both succeed.
pub async fn callback(
	State(state): State<AppState>,
	session: Session,
	Query(query): Query<CallbackQuery>,
) -> ApiResult<Redirect> {
	if let Some(error) = query.error {
		tracing::warn!(
			error = %error,
			description = ?query.error_description,
			"LinkedIn returned an authorization error."
		);

		return Err(ApiError::bad_request(error));
	}

	let mut data = SessionData::load(&session)
		.await
		.map_err(|e| state.internal_error(SESSION_FAILED, e))?;

	if !data.state_matches(query.state.as_deref()) {
		tracing::warn!("OAuth state mismatch on callback.");

		return Err(ApiError::forbidden("Invalid state parameter"));
	}

	let code = query
		.code
		.filter(|code| !code.trim().is_empty())
		.ok_or_else(|| ApiError::bad_request("Missing authorization code"))?;
	let grant = state
		.linkedin
		.exchange_code(&code)
		.await
		.map_err(|e| state.internal_error(AUTH_FAILED, e))?;
	let profile = state
		.linkedin
		.fetch_profile(Some(grant.access_token().expose()))
		.await
		.map_err(|e| state.internal_error(AUTH_FAILED, e))?;

	tracing::info!(
		member = %profile.id,
		expires_at = %grant.expires_at,
		"LinkedIn login completed."
	);

	// A session id issued before login must not carry over into the authenticated session.
	session.cycle_id().await.map_err(|e| state.internal_error(AUTH_FAILED, e))?;
	data.establish(&grant, profile);
	data.store(&session).await.map_err(|e| state.internal_error(AUTH_FAILED, e))?;

	Ok(Redirect::to("/jobs"))
}

/// Drops the session and returns to the landing page.
pub async fn logout(session: Session) -> Redirect {
	if let Err(e) = session.flush().await {
		tracing::warn!(error = %e, "Failed to clear session on logout.");
	}

	Redirect::to("/")
}

/// Profile captured at login.
pub async fn me(State(state): State<AppState>, session: Session) -> ApiResult<Json<Profile>> {
	let data = SessionData::load(&session)
		.await
		.map_err(|e| state.internal_error(SESSION_FAILED, e))?;

	data.user.map(Json).ok_or_else(|| ApiError::unauthorized(UNAUTHORIZED_MESSAGE))
}
