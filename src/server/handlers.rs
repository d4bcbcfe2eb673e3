//! Request handlers grouped by surface.

pub mod auth;
pub mod health;
pub mod jobs;
pub mod pages;
