//! Access token models and the per-session login state.

pub mod session;
pub mod token;

pub use session::*;
pub use token::{grant::*, secret::*};
