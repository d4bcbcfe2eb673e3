//! Token secrets and the grants minted by the token endpoint.

pub mod grant;
pub mod secret;
