//! Member profile lookup merging the `/me` and `/emailAddress` calls.

// crates.io
use reqwest::Method;
// self
use crate::{
	_prelude::*,
	error::UpstreamError,
	flows::LinkedInClient,
	model::{EMAIL_PROJECTION, EmailAddressResponse, MeResponse, PROFILE_PROJECTION, Profile},
	obs::{self, CallOutcome, CallSpan, UpstreamCall},
};

const CALL: UpstreamCall = UpstreamCall::Profile;

impl LinkedInClient {
	/// Fetches the member profile and primary email concurrently and merges them.
	///
	/// Either lookup failing fails the whole call; there is no partial profile.
	pub async fn fetch_profile(&self, access_token: Option<&str>) -> Result<Profile> {
		let token = access_token.filter(|token| !token.is_empty()).ok_or(Error::MissingToken)?;
		let span = CallSpan::new(CALL, "fetch_profile");

		obs::record_call_outcome(CALL, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let me_url =
					self.config.api_endpoint(&format!("me?projection={PROFILE_PROJECTION}"))?;
				let email_url = self.config.api_endpoint(&format!(
					"emailAddress?q=members&projection={EMAIL_PROJECTION}"
				))?;
				let me = self.get_json::<MeResponse>(me_url, token);
				let email = self.get_json::<EmailAddressResponse>(email_url, token);
				let (me, email) = tokio::try_join!(me, email)?;

				Ok::<_, UpstreamError>(Profile::from_parts(me, email))
			})
			.await
			.map_err(|e| {
				tracing::error!(status = ?e.status(), error = %e, "Profile lookup failed.");

				Error::ProfileFetch(e)
			});

		obs::record_call_outcome(CALL, CallOutcome::of(&result));

		result
	}

	async fn get_json<T>(&self, url: Url, token: &str) -> Result<T, UpstreamError>
	where
		T: serde::de::DeserializeOwned,
	{
		let request = self.http_client.request(Method::GET, url).bearer_auth(token);

		self.http_client.send(CALL, request).await?.json()
	}
}
