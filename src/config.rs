//! Environment-driven configuration for the proxy and its LinkedIn client.

// std
use std::path::PathBuf;
// crates.io
use oauth2::{ClientId, ClientSecret};
// self
use crate::{_prelude::*, error::ConfigError};

/// Default LinkedIn REST base.
pub const DEFAULT_API_URL: &str = "https://api.linkedin.com/v2";
/// Default LinkedIn OAuth base.
pub const DEFAULT_OAUTH_URL: &str = "https://www.linkedin.com/oauth/v2";
/// Scopes requested when `LINKEDIN_SCOPES` is unset.
pub const DEFAULT_SCOPES: &str = "r_liteprofile r_emailaddress";
/// Outbound calls admitted per second when `LINKEDIN_RATE_LIMIT_PER_SECOND` is unset.
pub const DEFAULT_RATE_LIMIT_PER_SECOND: u32 = 5;

/// Deployment environment, read from `NODE_ENV`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
	/// Local development; error details are exposed to clients.
	#[default]
	Development,
	/// Production; cookies are `Secure` and error details are hidden.
	Production,
	/// Automated test runs.
	Test,
}
impl Environment {
	/// Whether internal error details may be returned to clients.
	pub fn exposes_error_details(self) -> bool {
		matches!(self, Self::Development)
	}

	/// Whether this is the production environment.
	pub fn is_production(self) -> bool {
		matches!(self, Self::Production)
	}
}
impl FromStr for Environment {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"development" | "dev" => Ok(Self::Development),
			"production" | "prod" => Ok(Self::Production),
			"test" => Ok(Self::Test),
			other => Err(ConfigError::InvalidVar {
				name: "NODE_ENV",
				reason: format!("unknown environment `{other}`"),
			}),
		}
	}
}

/// Log output format, read from `LOG_FORMAT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
	/// Human-readable lines.
	#[default]
	Pretty,
	/// One JSON object per event.
	Json,
}
impl FromStr for LogFormat {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"pretty" | "text" => Ok(Self::Pretty),
			"json" => Ok(Self::Json),
			other => Err(ConfigError::InvalidVar {
				name: "LOG_FORMAT",
				reason: format!("expected `json` or `pretty`, got `{other}`"),
			}),
		}
	}
}

/// LinkedIn application credentials, endpoints, and outbound budget.
#[derive(Clone, Debug)]
pub struct LinkedInConfig {
	/// OAuth client identifier.
	pub client_id: ClientId,
	/// Primary client secret.
	pub client_secret: ClientSecret,
	/// Secret tried once when the primary is rejected.
	pub secondary_client_secret: Option<ClientSecret>,
	/// Callback URL registered with LinkedIn.
	pub redirect_uri: Url,
	/// REST base, without a trailing slash.
	pub api_url: Url,
	/// OAuth base, without a trailing slash.
	pub oauth_url: Url,
	/// Browser authorization endpoint derived from [`Self::oauth_url`].
	pub authorization_endpoint: Url,
	/// Token endpoint derived from [`Self::oauth_url`].
	pub token_endpoint: Url,
	/// Scopes requested during login.
	pub scopes: Vec<String>,
	/// Outbound calls admitted per second.
	pub rate_limit_per_second: u32,
}
impl LinkedInConfig {
	/// Starts a builder with the mandatory credentials.
	pub fn builder(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		redirect_uri: Url,
	) -> LinkedInConfigBuilder {
		LinkedInConfigBuilder::new(client_id, client_secret, redirect_uri)
	}

	/// Joins `path` onto the REST base.
	pub fn api_endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
		join_endpoint(&self.api_url, path)
	}
}

/// Builder that validates and derives [`LinkedInConfig`] endpoints.
#[derive(Clone, Debug)]
pub struct LinkedInConfigBuilder {
	client_id: String,
	client_secret: String,
	secondary_client_secret: Option<String>,
	redirect_uri: Url,
	api_url: Option<Url>,
	oauth_url: Option<Url>,
	scopes: Option<Vec<String>>,
	rate_limit_per_second: u32,
}
impl LinkedInConfigBuilder {
	fn new(client_id: impl Into<String>, client_secret: impl Into<String>, redirect_uri: Url) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			secondary_client_secret: None,
			redirect_uri,
			api_url: None,
			oauth_url: None,
			scopes: None,
			rate_limit_per_second: DEFAULT_RATE_LIMIT_PER_SECOND,
		}
	}

	/// Sets the secret tried when the primary one is rejected.
	pub fn secondary_client_secret(mut self, secret: impl Into<String>) -> Self {
		self.secondary_client_secret = Some(secret.into());

		self
	}

	/// Overrides the REST base.
	pub fn api_url(mut self, url: Url) -> Self {
		self.api_url = Some(url);

		self
	}

	/// Overrides the OAuth base.
	pub fn oauth_url(mut self, url: Url) -> Self {
		self.oauth_url = Some(url);

		self
	}

	/// Replaces the requested scopes.
	pub fn scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scopes = Some(scopes.into_iter().map(Into::into).collect());

		self
	}

	/// Sets the outbound budget.
	pub fn rate_limit_per_second(mut self, per_second: u32) -> Self {
		self.rate_limit_per_second = per_second;

		self
	}

	/// Validates the inputs and derives the endpoint URLs.
	pub fn build(self) -> Result<LinkedInConfig, ConfigError> {
		if self.client_id.trim().is_empty() {
			return Err(ConfigError::MissingVar { name: "LINKEDIN_CLIENT_ID" });
		}
		if self.client_secret.trim().is_empty() {
			return Err(ConfigError::MissingVar { name: "LINKEDIN_CLIENT_SECRET" });
		}
		if self.rate_limit_per_second == 0 {
			return Err(ConfigError::ZeroRateLimit);
		}

		let api_url = strip_trailing_slash(match self.api_url {
			Some(url) => url,
			None => parse_url("LINKEDIN_API_URL", DEFAULT_API_URL)?,
		});
		let oauth_url = strip_trailing_slash(match self.oauth_url {
			Some(url) => url,
			None => parse_url("LINKEDIN_OAUTH_URL", DEFAULT_OAUTH_URL)?,
		});
		let authorization_endpoint = join_endpoint(&oauth_url, "authorization")
			.map_err(|source| ConfigError::InvalidUrl { name: "LINKEDIN_OAUTH_URL", source })?;
		let token_endpoint = join_endpoint(&oauth_url, "accessToken")
			.map_err(|source| ConfigError::InvalidUrl { name: "LINKEDIN_OAUTH_URL", source })?;
		let scopes = self.scopes.unwrap_or_else(|| split_scopes(DEFAULT_SCOPES));

		Ok(LinkedInConfig {
			client_id: ClientId::new(self.client_id),
			client_secret: ClientSecret::new(self.client_secret),
			secondary_client_secret: self
				.secondary_client_secret
				.filter(|secret| !secret.trim().is_empty())
				.map(ClientSecret::new),
			redirect_uri: self.redirect_uri,
			api_url,
			oauth_url,
			authorization_endpoint,
			token_endpoint,
			scopes,
			rate_limit_per_second: self.rate_limit_per_second,
		})
	}
}

/// Process configuration assembled from the environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
	/// Bind address.
	pub host: String,
	/// Bind port.
	pub port: u16,
	/// Deployment environment.
	pub environment: Environment,
	/// Log output format.
	pub log_format: LogFormat,
	/// Directory served for unmatched routes.
	pub static_dir: PathBuf,
	/// Whether the `/test` fixture routes are mounted.
	pub fixture_routes: bool,
	/// LinkedIn client settings.
	pub linkedin: LinkedInConfig,
}
impl AppConfig {
	/// Reads configuration from the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Reads configuration through `lookup`; empty values count as unset.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
		let required = |name: &'static str| var(name).ok_or(ConfigError::MissingVar { name });
		let environment: Environment =
			var("NODE_ENV").map(|raw| raw.parse()).transpose()?.unwrap_or_default();
		let log_format: LogFormat =
			var("LOG_FORMAT").map(|raw| raw.parse()).transpose()?.unwrap_or_default();
		let port: u16 = match var("PORT") {
			Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
				name: "PORT",
				reason: format!("`{raw}` is not a valid port"),
			})?,
			None => 3000,
		};
		let fixture_routes = match var("ENABLE_FIXTURE_ROUTES") {
			Some(raw) => parse_flag("ENABLE_FIXTURE_ROUTES", &raw)?,
			None => !environment.is_production(),
		};
		let redirect_uri = parse_url("LINKEDIN_REDIRECT_URI", &required("LINKEDIN_REDIRECT_URI")?)?;
		let mut linkedin = LinkedInConfig::builder(
			required("LINKEDIN_CLIENT_ID")?,
			required("LINKEDIN_CLIENT_SECRET")?,
			redirect_uri,
		);

		if let Some(secret) = var("LINKEDIN_SECOND_CLIENT_SECRET") {
			linkedin = linkedin.secondary_client_secret(secret);
		}
		if let Some(raw) = var("LINKEDIN_API_URL") {
			linkedin = linkedin.api_url(parse_url("LINKEDIN_API_URL", &raw)?);
		}
		if let Some(raw) = var("LINKEDIN_OAUTH_URL") {
			linkedin = linkedin.oauth_url(parse_url("LINKEDIN_OAUTH_URL", &raw)?);
		}
		if let Some(raw) = var("LINKEDIN_SCOPES") {
			linkedin = linkedin.scopes(split_scopes(&raw));
		}
		if let Some(raw) = var("LINKEDIN_RATE_LIMIT_PER_SECOND") {
			let per_second: u32 = raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
				name: "LINKEDIN_RATE_LIMIT_PER_SECOND",
				reason: format!("`{raw}` is not a whole number"),
			})?;

			linkedin = linkedin.rate_limit_per_second(per_second);
		}

		Ok(Self {
			host: var("HOST").unwrap_or_else(|| "0.0.0.0".into()),
			port,
			environment,
			log_format,
			static_dir: var("STATIC_DIR").map(PathBuf::from).unwrap_or_else(|| "public".into()),
			fixture_routes,
			linkedin: linkedin.build()?,
		})
	}
}

fn parse_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
	Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl { name, source })
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
	match raw.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"0" | "false" | "no" | "off" => Ok(false),
		other => Err(ConfigError::InvalidVar { name, reason: format!("`{other}` is not a boolean") }),
	}
}

fn split_scopes(raw: &str) -> Vec<String> {
	raw.split([' ', ',']).filter(|scope| !scope.is_empty()).map(str::to_owned).collect()
}

fn strip_trailing_slash(mut url: Url) -> Url {
	let trimmed = url.path().trim_end_matches('/').to_owned();

	url.set_path(&trimmed);

	url
}

fn join_endpoint(base: &Url, path: &str) -> Result<Url, url::ParseError> {
	Url::parse(&format!("{}/{}", base.as_str().trim_end_matches('/'), path.trim_start_matches('/')))
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;

	fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map = pairs
			.iter()
			.map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
			.collect::<HashMap<_, _>>();

		move |name: &str| map.get(name).cloned()
	}

	const REQUIRED: [(&str, &str); 3] = [
		("LINKEDIN_CLIENT_ID", "client-id"),
		("LINKEDIN_CLIENT_SECRET", "primary-secret"),
		("LINKEDIN_REDIRECT_URI", "http://localhost:3000/auth/linkedin/callback"),
	];

	#[test]
	fn defaults_apply_when_only_credentials_are_set() {
		let config = AppConfig::from_lookup(lookup(&REQUIRED)).expect("Config should load.");

		assert_eq!(config.port, 3000);
		assert_eq!(config.host, "0.0.0.0");
		assert_eq!(config.environment, Environment::Development);
		assert!(config.fixture_routes);
		assert_eq!(config.linkedin.api_url.as_str(), "https://api.linkedin.com/v2");
		assert_eq!(
			config.linkedin.token_endpoint.as_str(),
			"https://www.linkedin.com/oauth/v2/accessToken"
		);
		assert_eq!(
			config.linkedin.authorization_endpoint.as_str(),
			"https://www.linkedin.com/oauth/v2/authorization"
		);
		assert_eq!(config.linkedin.scopes, vec!["r_liteprofile", "r_emailaddress"]);
		assert_eq!(config.linkedin.rate_limit_per_second, DEFAULT_RATE_LIMIT_PER_SECOND);
		assert!(config.linkedin.secondary_client_secret.is_none());
	}

	#[test]
	fn missing_client_id_is_reported() {
		let err = AppConfig::from_lookup(lookup(&REQUIRED[1..])).expect_err("Config should fail.");

		assert!(matches!(err, ConfigError::MissingVar { name: "LINKEDIN_CLIENT_ID" }));
	}

	#[test]
	fn production_disables_fixture_routes_by_default() {
		let mut pairs = REQUIRED.to_vec();

		pairs.push(("NODE_ENV", "production"));
		pairs.push(("LINKEDIN_SECOND_CLIENT_SECRET", "secondary-secret"));
		pairs.push(("LINKEDIN_API_URL", "http://127.0.0.1:9000/v2/"));

		let config = AppConfig::from_lookup(lookup(&pairs)).expect("Config should load.");

		assert!(!config.fixture_routes);
		assert!(config.environment.is_production());
		assert!(config.linkedin.secondary_client_secret.is_some());
		assert_eq!(
			config.linkedin.api_endpoint("jobSearch").expect("Endpoint should join.").as_str(),
			"http://127.0.0.1:9000/v2/jobSearch"
		);
	}

	#[test]
	fn zero_rate_limit_is_rejected() {
		let mut pairs = REQUIRED.to_vec();

		pairs.push(("LINKEDIN_RATE_LIMIT_PER_SECOND", "0"));

		assert!(matches!(AppConfig::from_lookup(lookup(&pairs)), Err(ConfigError::ZeroRateLimit)));
	}

	#[test]
	fn secrets_are_redacted_in_debug_output() {
		let config = AppConfig::from_lookup(lookup(&REQUIRED)).expect("Config should load.");

		assert!(!format!("{config:?}").contains("primary-secret"));
	}
}
