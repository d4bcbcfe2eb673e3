//! Access grants derived from token endpoint responses.

// self
use crate::{_prelude::*, auth::TokenSecret, error::UpstreamError, oauth::TokenResponse};

/// Token endpoint response stamped with absolute issue and expiry instants.
#[derive(Clone, Debug)]
pub struct TokenGrant {
	/// Raw response returned by LinkedIn.
	pub response: TokenResponse,
	/// Instant the response was received.
	pub issued_at: OffsetDateTime,
	/// `issued_at + expires_in`.
	pub expires_at: OffsetDateTime,
}
impl TokenGrant {
	/// Stamps `response` as received at `issued_at`, rejecting non-positive lifetimes.
	pub fn from_response(
		response: TokenResponse,
		issued_at: OffsetDateTime,
	) -> Result<Self, UpstreamError> {
		if response.expires_in <= 0 {
			return Err(UpstreamError::NonPositiveExpiresIn);
		}

		let expires_at = issued_at + Duration::seconds(response.expires_in);

		Ok(Self { response, issued_at, expires_at })
	}

	/// Access token secret; callers must avoid logging it.
	pub fn access_token(&self) -> &TokenSecret {
		&self.response.access_token
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::datetime;
	// self
	use super::*;

	fn response(expires_in: i64) -> TokenResponse {
		TokenResponse {
			access_token: TokenSecret::new("access"),
			expires_in,
			refresh_token: None,
			refresh_token_expires_in: None,
			scope: None,
		}
	}

	#[test]
	fn expiry_is_issue_time_plus_lifetime() {
		let issued_at = datetime!(2025-01-01 00:00 UTC);
		let grant = TokenGrant::from_response(response(3600), issued_at)
			.expect("Positive lifetime should be accepted.");

		assert_eq!(grant.issued_at, issued_at);
		assert_eq!(grant.expires_at, datetime!(2025-01-01 01:00 UTC));
	}

	#[test]
	fn non_positive_lifetime_is_rejected() {
		let issued_at = datetime!(2025-01-01 00:00 UTC);

		assert!(matches!(
			TokenGrant::from_response(response(0), issued_at),
			Err(UpstreamError::NonPositiveExpiresIn)
		));
		assert!(TokenGrant::from_response(response(-5), issued_at).is_err());
	}
}
