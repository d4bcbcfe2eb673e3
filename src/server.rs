//! HTTP surface: routes, the session gate, handlers, and error rendering.

pub mod error;
pub mod fixtures;
pub mod gate;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::*;
pub use gate::*;
pub use routes::*;
pub use state::*;

/// Login entry point; gated requests with an expired token are sent here.
pub const LOGIN_PATH: &str = "/auth/linkedin";
/// Session cookie name.
pub const SESSION_COOKIE: &str = "linkedin-session";
/// Body of the 401 returned when no session token is present.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized. Please login with LinkedIn first.";
