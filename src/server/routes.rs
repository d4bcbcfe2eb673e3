//! Router assembly.

// crates.io
use axum::{Router, middleware, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
// self
use crate::{
	_prelude::*,
	server::{
		AppState, SESSION_COOKIE, fixtures,
		gate::require_session_token,
		handlers::{auth, health, jobs, pages},
	},
};

/// Inactivity window after which a session is discarded.
pub const SESSION_TTL: Duration = Duration::hours(24);

/// Builds the full application router with an in-memory session store.
pub fn build_router(state: AppState) -> Router {
	let sessions = SessionManagerLayer::new(MemoryStore::default())
		.with_name(SESSION_COOKIE)
		.with_secure(state.environment.is_production())
		.with_expiry(Expiry::OnInactivity(SESSION_TTL));
	let gated = Router::new()
		.route("/api/jobs", get(jobs::search))
		.route("/api/jobs/:id", get(jobs::detail))
		.route("/api/me", get(auth::me))
		.route_layer(middleware::from_fn_with_state(state.clone(), require_session_token));
	let mut router = Router::new()
		.route("/auth/linkedin", get(auth::login))
		.route("/auth/linkedin/callback", get(auth::callback))
		.route("/auth/logout", get(auth::logout))
		.route("/api/health", get(health::health))
		.route("/jobs", get(pages::jobs_page))
		.merge(gated);

	if state.fixture_routes {
		router = router.merge(fixtures::router());
	}

	router
		.fallback_service(ServeDir::new(state.static_dir.as_path()))
		.layer(sessions)
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}
