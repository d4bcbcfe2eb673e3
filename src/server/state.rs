//! Shared application state handed to every handler.

// std
use std::path::{Path, PathBuf};
// self
use crate::{
	_prelude::*,
	config::{AppConfig, Environment},
	flows::LinkedInClient,
	server::ApiError,
};

/// Cloneable state shared across requests.
#[derive(Clone, Debug)]
pub struct AppState {
	/// LinkedIn API client.
	pub linkedin: LinkedInClient,
	/// Deployment environment.
	pub environment: Environment,
	/// Directory holding `index.html`, `jobs.html`, and other static assets.
	pub static_dir: Arc<PathBuf>,
	/// Whether the `/test` fixture routes are mounted.
	pub fixture_routes: bool,
}
impl AppState {
	/// Builds state from process configuration.
	pub fn new(config: &AppConfig) -> Result<Self> {
		let linkedin = LinkedInClient::new(config.linkedin.clone())?;

		Ok(Self::with_client(linkedin, config.environment, &config.static_dir)
			.with_fixture_routes(config.fixture_routes))
	}

	/// Builds state around an existing client; fixture routes are off.
	pub fn with_client(
		linkedin: LinkedInClient,
		environment: Environment,
		static_dir: impl AsRef<Path>,
	) -> Self {
		Self {
			linkedin,
			environment,
			static_dir: Arc::new(static_dir.as_ref().to_path_buf()),
			fixture_routes: false,
		}
	}

	/// Toggles the `/test` fixture routes.
	pub fn with_fixture_routes(mut self, enabled: bool) -> Self {
		self.fixture_routes = enabled;

		self
	}

	/// Logs `err` and converts it into a 500 carrying `message`; details are attached in
	/// development only.
	pub fn internal_error<E>(&self, message: &'static str, err: E) -> ApiError
	where
		E: Into<Error>,
	{
		let err = err.into();
		let cause = err.upstream().map(ToString::to_string);

		tracing::error!(
			error = %err,
			cause = ?cause,
			status = ?err.upstream_status(),
			"{message}."
		);

		let detail = self.environment.exposes_error_details().then(|| match cause {
			Some(cause) => format!("{err} {cause}"),
			None => err.to_string(),
		});

		ApiError::Internal { message, detail }
	}
}
