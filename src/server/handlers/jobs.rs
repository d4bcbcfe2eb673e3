//! Job search and detail handlers behind the session gate.

// crates.io
use axum::{
	Extension, Json,
	extract::{Path, Query, State},
};
use serde_json::Value;
// self
use crate::{
	model::JobSearchQuery,
	server::{ApiError, ApiResult, AppState, SessionBearer},
};

/// `GET /api/jobs`. LinkedIn's page is relayed without reshaping.
pub async fn search(
	State(state): State<AppState>,
	Extension(bearer): Extension<SessionBearer>,
	Query(query): Query<JobSearchQuery>,
) -> ApiResult<Json<Value>> {
	let params = query.into_params().map_err(|e| ApiError::bad_request(e.to_string()))?;
	let response = state
		.linkedin
		.search_jobs(&params, Some(bearer.expose()))
		.await
		.map_err(|e| state.internal_error("Failed to search for jobs", e))?;

	Ok(Json(response))
}

/// `GET /api/jobs/:id`.
pub async fn detail(
	State(state): State<AppState>,
	Extension(bearer): Extension<SessionBearer>,
	Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
	match state.linkedin.job_details(&id, Some(bearer.expose())).await {
		Ok(job) => Ok(Json(job)),
		Err(e) if e.upstream_status() == Some(404) => {
			tracing::info!(job = %id, "LinkedIn reported the job as missing.");

			Err(ApiError::not_found("Job not found"))
		},
		Err(e) => Err(state.internal_error("Failed to get job details", e)),
	}
}
