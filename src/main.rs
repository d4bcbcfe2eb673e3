//! LinkedIn job proxy server binary.

// crates.io
use color_eyre::eyre::Result;
use tokio::net::TcpListener;
// self
use linkedin_job_proxy::{
	config::AppConfig,
	obs,
	server::{self, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	dotenvy::dotenv().ok();

	let config = AppConfig::from_env()?;

	obs::install_subscriber(config.log_format)?;

	tracing::info!(
		environment = ?config.environment,
		fixture_routes = config.fixture_routes,
		rate_limit = config.linkedin.rate_limit_per_second,
		"Starting LinkedIn job proxy."
	);

	let state = AppState::new(&config)?;
	let app = server::build_router(state);
	let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;

	tracing::info!(address = %listener.local_addr()?, "Server listening.");

	axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

	tracing::info!("Server shutdown complete.");

	Ok(())
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		tracing::error!(error = %e, "Failed to listen for the shutdown signal.");

		std::future::pending::<()>().await;
	}

	tracing::info!("Received shutdown signal.");
}
