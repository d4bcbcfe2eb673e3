//! JSON error responses returned to browser clients.

// crates.io
use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};
// self
use crate::_prelude::*;

/// Handler result alias.
pub type ApiResult<T> = Result<T, ApiError>;

/// Client-facing failure rendered as `{error, message?}`.
#[derive(Debug, ThisError)]
pub enum ApiError {
	/// Malformed or incomplete request.
	#[error("{0}")]
	BadRequest(String),
	/// No session token.
	#[error("{0}")]
	Unauthorized(String),
	/// CSRF state mismatch.
	#[error("{0}")]
	Forbidden(String),
	/// Unknown resource.
	#[error("{0}")]
	NotFound(String),
	/// Upstream or session store failure. `detail` is only populated in development.
	#[error("{message}")]
	Internal {
		/// Generic message shown to every client.
		message: &'static str,
		/// Underlying error text.
		detail: Option<String>,
	},
}
impl ApiError {
	/// 400 with `message`.
	pub fn bad_request(message: impl Into<String>) -> Self {
		Self::BadRequest(message.into())
	}

	/// 401 with `message`.
	pub fn unauthorized(message: impl Into<String>) -> Self {
		Self::Unauthorized(message.into())
	}

	/// 403 with `message`.
	pub fn forbidden(message: impl Into<String>) -> Self {
		Self::Forbidden(message.into())
	}

	/// 404 with `message`.
	pub fn not_found(message: impl Into<String>) -> Self {
		Self::NotFound(message.into())
	}

	/// HTTP status for this error.
	pub fn status_code(&self) -> StatusCode {
		match self {
			ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
			ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
			ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
			ApiError::NotFound(_) => StatusCode::NOT_FOUND,
			ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let status = self.status_code();
		let body = match self {
			ApiError::Internal { message, detail } =>
				ErrorBody { error: message.into(), message: detail },
			other => ErrorBody { error: other.to_string(), message: None },
		};

		(status, Json(body)).into_response()
	}
}

#[derive(Serialize)]
struct ErrorBody {
	error: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	message: Option<String>,
}
