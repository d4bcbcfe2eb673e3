//! Job search and job detail proxies.

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	error::UpstreamError,
	flows::LinkedInClient,
	model::JobSearchParams,
	obs::{self, CallOutcome, CallSpan, UpstreamCall},
};

/// Header LinkedIn requires on Rest.li 2.0 endpoints.
pub const RESTLI_PROTOCOL_HEADER: &str = "X-Restli-Protocol-Version";
/// Protocol version sent in [`RESTLI_PROTOCOL_HEADER`].
pub const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";

// Everything except the characters URI components leave unescaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

/// Expands a bare job id into `urn:li:job:<id>`; values already in the `urn:li:` namespace pass
/// through unchanged.
pub fn normalize_job_urn(id: &str) -> String {
	if id.starts_with("urn:li:") { id.to_owned() } else { format!("urn:li:job:{id}") }
}

/// Encodes a URN as a single URI component.
pub fn encode_path_segment(value: &str) -> String {
	utf8_percent_encode(value, URI_COMPONENT).to_string()
}

impl LinkedInClient {
	/// Searches jobs with defaults applied to unset parameters.
	///
	/// The page is returned exactly as LinkedIn sent it.
	pub async fn search_jobs(
		&self,
		params: &JobSearchParams,
		access_token: Option<&str>,
	) -> Result<Value> {
		const CALL: UpstreamCall = UpstreamCall::JobSearch;

		let token = require_token(access_token)?;
		let span = CallSpan::new(CALL, "search_jobs");

		obs::record_call_outcome(CALL, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = self.config.api_endpoint("jobSearch")?;
				let request = self.restli_get(url, token).query(&params.to_query());

				self.http_client.send(CALL, request).await?.json::<Value>()
			})
			.await
			.map_err(|e| {
				tracing::error!(status = ?e.status(), error = %e, "Job search failed.");

				Error::JobSearch(e)
			});

		obs::record_call_outcome(CALL, CallOutcome::of(&result));

		result
	}

	/// Fetches a single job by bare id or URN, returned exactly as LinkedIn sent it.
	pub async fn job_details(&self, id: &str, access_token: Option<&str>) -> Result<Value> {
		const CALL: UpstreamCall = UpstreamCall::JobDetail;

		let token = require_token(access_token)?;
		let span = CallSpan::new(CALL, "job_details");

		obs::record_call_outcome(CALL, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = self.job_detail_url(id)?;

				self.http_client.send(CALL, self.restli_get(url, token)).await?.json::<Value>()
			})
			.await
			.map_err(|e| {
				tracing::error!(
					job = id,
					status = ?e.status(),
					error = %e,
					"Job detail lookup failed."
				);

				Error::JobDetail(e)
			});

		obs::record_call_outcome(CALL, CallOutcome::of(&result));

		result
	}

	/// `{api}/jobs/{percent-encoded URN}` for `id`.
	pub fn job_detail_url(&self, id: &str) -> Result<Url, UpstreamError> {
		let urn = normalize_job_urn(id);

		Ok(self.config.api_endpoint(&format!("jobs/{}", encode_path_segment(&urn)))?)
	}

	fn restli_get(&self, url: Url, token: &str) -> RequestBuilder {
		self.http_client
			.request(Method::GET, url)
			.bearer_auth(token)
			.header(RESTLI_PROTOCOL_HEADER, RESTLI_PROTOCOL_VERSION)
	}
}

fn require_token(access_token: Option<&str>) -> Result<&str> {
	access_token.filter(|token| !token.is_empty()).ok_or(Error::MissingToken)
}
