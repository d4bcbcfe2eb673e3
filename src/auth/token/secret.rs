//! Bearer token wrapper kept out of logs and error messages.

// self
use crate::_prelude::*;

const REDACTED: &str = "<redacted>";

/// LinkedIn bearer token. Serializes as the plain string so it can live in the session record,
/// but every formatter prints a placeholder.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a token issued by the token endpoint.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Raw value for the outbound `Authorization` header.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// `true` for an empty or whitespace-only token, which the session gate treats as absent.
	pub fn is_blank(&self) -> bool {
		self.0.trim().is_empty()
	}
}
impl From<String> for TokenSecret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "TokenSecret({REDACTED})")
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(REDACTED)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn formatters_never_print_the_token() {
		let token = TokenSecret::new("AQV-member-token");

		assert_eq!(format!("{token:?}"), "TokenSecret(<redacted>)");
		assert_eq!(token.to_string(), "<redacted>");
		assert_eq!(token.expose(), "AQV-member-token");
	}

	#[test]
	fn session_record_stores_the_plain_value() {
		let token = TokenSecret::from(String::from("abc"));

		assert_eq!(serde_json::to_string(&token).expect("Token should serialize."), "\"abc\"");
		assert!(TokenSecret::new("  ").is_blank());
		assert!(!token.is_blank());
	}
}
