//! Liveness probe.

// crates.io
use axum::Json;
use time::format_description::well_known::Rfc3339;
// self
use crate::_prelude::*;

/// Health payload.
#[derive(Clone, Debug, Serialize)]
pub struct HealthResponse {
	/// Always `OK` while the process serves requests.
	pub status: &'static str,
	/// Current UTC time in RFC 3339.
	pub timestamp: String,
}
impl HealthResponse {
	/// Snapshot at `now`.
	pub fn at(now: OffsetDateTime) -> Self {
		Self { status: "OK", timestamp: now.format(&Rfc3339).unwrap_or_default() }
	}
}

/// `GET /api/health`.
pub async fn health() -> Json<HealthResponse> {
	Json(HealthResponse::at(OffsetDateTime::now_utc()))
}
