//! Authorization code exchange with a one-shot secondary-secret fallback.

// crates.io
use oauth2::{AuthorizationCode, ClientSecret};
use reqwest::Method;
// self
use crate::{
	_prelude::*,
	auth::TokenGrant,
	error::UpstreamError,
	flows::LinkedInClient,
	oauth::{self, TokenResponse},
	obs::{self, CallOutcome, CallSpan, UpstreamCall},
};

const CALL: UpstreamCall = UpstreamCall::TokenExchange;

#[derive(Clone, Copy, Debug)]
enum SecretSlot {
	Primary,
	Secondary,
}
impl SecretSlot {
	const fn as_str(self) -> &'static str {
		match self {
			SecretSlot::Primary => "primary",
			SecretSlot::Secondary => "secondary",
		}
	}
}

impl LinkedInClient {
	/// Exchanges an authorization code for an access grant.
	///
	/// The primary secret is tried first. When it fails for any reason and a secondary
	/// secret is configured, the exchange is retried exactly once with that secret.
	/// Nothing is persisted; the caller stores the grant where it belongs.
	pub async fn exchange_code(&self, code: &str) -> Result<TokenGrant> {
		let span = CallSpan::new(CALL, "exchange_code");

		obs::record_call_outcome(CALL, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let code = AuthorizationCode::new(code.to_owned());
				let primary =
					self.request_token(&code, &self.config.client_secret, SecretSlot::Primary).await;
				let response = match (primary, &self.config.secondary_client_secret) {
					(Ok(response), _) => response,
					(Err(e), None) => return Err(Error::TokenExchange(e)),
					(Err(e), Some(secondary)) => {
						tracing::warn!(
							status = ?e.status(),
							"Primary client secret was rejected, retrying with the secondary secret."
						);

						self.request_token(&code, secondary, SecretSlot::Secondary)
							.await
							.map_err(Error::TokenExchange)?
					},
				};

				TokenGrant::from_response(response, OffsetDateTime::now_utc())
					.map_err(Error::TokenExchange)
			})
			.await;

		obs::record_call_outcome(CALL, CallOutcome::of(&result));

		result
	}

	async fn request_token(
		&self,
		code: &AuthorizationCode,
		secret: &ClientSecret,
		slot: SecretSlot,
	) -> Result<TokenResponse, UpstreamError> {
		let form = oauth::token_request_form(&self.config, code, secret);
		let request =
			self.http_client.request(Method::POST, self.config.token_endpoint.clone()).form(&form);
		let result = match self.http_client.send(CALL, request).await {
			Ok(response) => response.json::<TokenResponse>(),
			Err(e) => Err(e),
		};

		if let Err(e) = &result {
			tracing::error!(
				attempt = slot.as_str(),
				status = ?e.status(),
				error = %e,
				"Token exchange attempt failed."
			);
		}

		result
	}
}
