//! Rate-limited transport shared by every outbound LinkedIn call.
//!
//! [`LinkedInHttpClient`] waits on its [`RateLimitPolicy`] before each dispatch, buffers
//! the body, and classifies non-success statuses into [`UpstreamError::Status`] while
//! keeping the [`ResponseMetadata`] needed for logging.

// crates.io
use reqwest::{
	Method, Request, RequestBuilder,
	header::{HeaderMap, RETRY_AFTER},
	redirect::Policy,
};
use serde::de::DeserializeOwned;
use time::format_description::well_known::Rfc2822;
// self
use crate::{
	_prelude::*,
	error::{ConfigError, UpstreamError},
	ext::{GovernorRateLimit, RateLimitContext, RateLimitPolicy},
	obs::UpstreamCall,
};

const BODY_PREVIEW_LIMIT: usize = 256;

/// Metadata captured from the most recent HTTP response.
#[derive(Clone, Debug, Default)]
pub struct ResponseMetadata {
	/// HTTP status code returned by LinkedIn, if available.
	pub status: Option<u16>,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
}

/// Buffered successful response.
#[derive(Clone, Debug)]
pub struct UpstreamResponse {
	/// Status and retry metadata.
	pub meta: ResponseMetadata,
	/// Raw body bytes.
	pub body: Vec<u8>,
}
impl UpstreamResponse {
	/// Decodes the body, reporting the JSON path of the first mismatch.
	pub fn json<T>(&self) -> Result<T, UpstreamError>
	where
		T: DeserializeOwned,
	{
		let mut deserializer = serde_json::Deserializer::from_slice(&self.body);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| UpstreamError::Parse { source, status: self.meta.status })
	}
}

/// Thin wrapper around [`ReqwestClient`] that consults a shared rate limit before each call.
/// Redirects are never followed; LinkedIn endpoints answer directly.
#[derive(Clone)]
pub struct LinkedInHttpClient {
	client: ReqwestClient,
	limiter: Arc<dyn RateLimitPolicy>,
}
impl LinkedInHttpClient {
	/// Builds a client admitting `per_second` calls each second.
	pub fn with_rate(per_second: u32) -> Result<Self, ConfigError> {
		Self::new(Arc::new(GovernorRateLimit::per_second(per_second)?))
	}

	/// Builds a client with a custom policy.
	pub fn new(limiter: Arc<dyn RateLimitPolicy>) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().redirect(Policy::none()).build()?;

		Ok(Self { client, limiter })
	}

	/// Starts a request against `url`.
	pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
		self.client.request(method, url)
	}

	/// Waits for rate-limit capacity, executes the request, and buffers the body.
	pub async fn send(
		&self,
		call: UpstreamCall,
		request: RequestBuilder,
	) -> Result<UpstreamResponse, UpstreamError> {
		let request: Request = request.build()?;

		self.limiter.acquire(&RateLimitContext::new(call)).await;

		tracing::debug!(
			call = call.as_str(),
			method = %request.method(),
			path = request.url().path(),
			"Dispatching LinkedIn request."
		);

		let response = self.client.execute(request).await?;
		let status = response.status();
		let meta = ResponseMetadata {
			status: Some(status.as_u16()),
			retry_after: parse_retry_after(response.headers()),
		};
		let body = response.bytes().await?.to_vec();

		if !status.is_success() {
			return Err(UpstreamError::Status {
				status: status.as_u16(),
				body_preview: truncate_preview(&body),
				retry_after: meta.retry_after,
			});
		}

		Ok(UpstreamResponse { meta, body })
	}
}
impl Debug for LinkedInHttpClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("LinkedInHttpClient").finish_non_exhaustive()
	}
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(secs as i64));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

fn truncate_preview(body: &[u8]) -> Option<String> {
	let text = String::from_utf8_lossy(body);
	let text = text.trim();

	if text.is_empty() {
		return None;
	}

	let mut preview = text.chars().take(BODY_PREVIEW_LIMIT).collect::<String>();

	if text.chars().count() > BODY_PREVIEW_LIMIT {
		preview.push('…');
	}

	Some(preview)
}
