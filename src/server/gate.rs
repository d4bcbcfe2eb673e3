//! Session gate placed in front of the LinkedIn proxy routes.

// crates.io
use axum::{
	extract::{Request, State},
	middleware::Next,
	response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
// self
use crate::{
	_prelude::*,
	auth::{GateDecision, SessionData, TokenSecret},
	server::{ApiError, AppState, LOGIN_PATH, UNAUTHORIZED_MESSAGE},
};

/// Bearer token of the current session, inserted into request extensions by the gate.
#[derive(Clone, Debug)]
pub struct SessionBearer(pub TokenSecret);
impl SessionBearer {
	/// Raw token for the outbound `Authorization` header.
	pub fn expose(&self) -> &str {
		self.0.expose()
	}
}

/// Rejects requests without a session token (401) and sends expired sessions back to login.
pub async fn require_session_token(
	State(state): State<AppState>,
	session: Session,
	mut request: Request,
	next: Next,
) -> Result<Response, ApiError> {
	let data = SessionData::load(&session)
		.await
		.map_err(|e| state.internal_error("Something went wrong!", e))?;

	match data.gate_at(OffsetDateTime::now_utc()) {
		GateDecision::Allow(token) => {
			request.extensions_mut().insert(SessionBearer(token));

			Ok(next.run(request).await)
		},
		GateDecision::MissingToken => Err(ApiError::unauthorized(UNAUTHORIZED_MESSAGE)),
		GateDecision::Expired => {
			tracing::info!(
				path = request.uri().path(),
				"Session token expired, redirecting to login."
			);

			Ok(Redirect::to(LOGIN_PATH).into_response())
		},
	}
}
