//! HTML pages that depend on session state.

// crates.io
use axum::{
	extract::State,
	response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
// self
use crate::{
	auth::SessionData,
	server::{ApiError, ApiResult, AppState, LOGIN_PATH},
};

/// `GET /jobs`: the search page, or a redirect to login when the session holds no token.
pub async fn jobs_page(State(state): State<AppState>, session: Session) -> ApiResult<Response> {
	let data = SessionData::load(&session)
		.await
		.map_err(|e| state.internal_error("Something went wrong!", e))?;

	if data.access_token.is_none() {
		return Ok(Redirect::to(LOGIN_PATH).into_response());
	}

	let path = state.static_dir.join("jobs.html");

	match tokio::fs::read_to_string(&path).await {
		Ok(html) => Ok(Html(html).into_response()),
		Err(e) => {
			tracing::warn!(path = %path.display(), error = %e, "Jobs page is unavailable.");

			Err(ApiError::not_found("Page not found"))
		},
	}
}
