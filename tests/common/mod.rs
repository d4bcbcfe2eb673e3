#![allow(dead_code)]

// std
use std::path::PathBuf;
// crates.io
use axum::{
	Router,
	body::{self, Body},
	http::{
		Request, Response, StatusCode,
		header::{COOKIE, LOCATION, SET_COOKIE},
	},
};
use httpmock::{Mock, prelude::*};
use serde_json::{Value, json};
use tower::ServiceExt;
// self
use linkedin_job_proxy::{
	config::{Environment, LinkedInConfig},
	ext::Unlimited,
	flows::LinkedInClient,
	http::LinkedInHttpClient,
	server::{self, AppState},
	url::Url,
};

pub const CLIENT_ID: &str = "client-linkedin";
pub const PRIMARY_SECRET: &str = "primary-secret";
pub const SECONDARY_SECRET: &str = "secondary-secret";
pub const REDIRECT_URI: &str = "http://localhost:3000/auth/linkedin/callback";
pub const ACCESS_TOKEN: &str = "member-access-token";

pub fn linkedin_config(server: &MockServer, secondary: Option<&str>) -> LinkedInConfig {
	let mut builder = LinkedInConfig::builder(
		CLIENT_ID,
		PRIMARY_SECRET,
		Url::parse(REDIRECT_URI).expect("Redirect URI should parse."),
	)
	.api_url(Url::parse(&server.url("/v2")).expect("Mock API URL should parse."))
	.oauth_url(Url::parse(&server.url("/oauth/v2")).expect("Mock OAuth URL should parse."));

	if let Some(secret) = secondary {
		builder = builder.secondary_client_secret(secret);
	}

	builder.build().expect("LinkedIn config should build.")
}

pub fn linkedin_client(server: &MockServer, secondary: Option<&str>) -> LinkedInClient {
	let http_client =
		LinkedInHttpClient::new(std::sync::Arc::new(Unlimited)).expect("HTTP client should build.");

	LinkedInClient::with_http_client(linkedin_config(server, secondary), http_client)
}

pub fn static_dir() -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

pub fn app(server: &MockServer, environment: Environment, fixtures: bool) -> Router {
	let state = AppState::with_client(linkedin_client(server, None), environment, static_dir())
		.with_fixture_routes(fixtures);

	server::build_router(state)
}

pub async fn mock_token<'a>(
	server: &'a MockServer,
	secret: &str,
	status: u16,
	body: Value,
) -> Mock<'a> {
	server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/v2/accessToken")
				.header("content-type", "application/x-www-form-urlencoded")
				.form_urlencoded_tuple("client_secret", secret);
			then.status(status).header("content-type", "application/json").body(body.to_string());
		})
		.await
}

pub fn token_body(access_token: &str, expires_in: i64) -> Value {
	json!({ "access_token": access_token, "expires_in": expires_in })
}

pub async fn mock_profile<'a>(server: &'a MockServer, token: &str) -> (Mock<'a>, Mock<'a>) {
	let bearer = format!("Bearer {token}");
	let me = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/me").header("authorization", bearer.as_str());
			then.status(200).header("content-type", "application/json").body(
				json!({
					"id": "member-1",
					"localizedFirstName": "Ada",
					"localizedLastName": "Lovelace",
					"profilePicture": {
						"displayImage~": {
							"elements": [{ "identifiers": [{ "identifier": "https://media.example/ada.png" }] }]
						}
					}
				})
				.to_string(),
			);
		})
		.await;
	let email = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/emailAddress").header("authorization", bearer.as_str());
			then.status(200).header("content-type", "application/json").body(
				json!({ "elements": [{ "handle~": { "emailAddress": "ada@example.com" } }] })
					.to_string(),
			);
		})
		.await;

	(me, email)
}

pub fn search_body() -> Value {
	json!({
		"paging": { "count": 1, "start": 0, "total": 1 },
		"elements": [{
			"entityUrn": "urn:li:job:42",
			"title": "Rust Engineer",
			"company": { "name": "Ferris Inc" },
			"trackingUrn": "urn:li:tracking:9"
		}]
	})
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
	let mut request = Request::builder().uri(uri);

	if let Some(cookie) = cookie {
		request = request.header(COOKIE, cookie);
	}

	app.clone()
		.oneshot(request.body(Body::empty()).expect("Request should build."))
		.await
		.expect("Router should respond.")
}

pub async fn json_body(response: Response<Body>) -> Value {
	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Body should be readable.");

	serde_json::from_slice(&bytes).expect("Body should be JSON.")
}

pub fn location(response: &Response<Body>) -> String {
	response
		.headers()
		.get(LOCATION)
		.and_then(|value| value.to_str().ok())
		.expect("Response should redirect.")
		.to_owned()
}

pub fn session_cookie(response: &Response<Body>) -> String {
	response
		.headers()
		.get(SET_COOKIE)
		.and_then(|value| value.to_str().ok())
		.and_then(|value| value.split(';').next())
		.expect("Response should set the session cookie.")
		.to_owned()
}

/// Runs the login redirect and the callback against mocked LinkedIn endpoints, returning the
/// cookie issued before login and the one issued by the callback.
pub async fn login_cookies(
	app: &Router,
	server: &MockServer,
	expires_in: i64,
) -> (String, String) {
	let response = get(app, "/auth/linkedin", None).await;

	assert_eq!(response.status(), StatusCode::SEE_OTHER);

	let cookie = session_cookie(&response);
	let authorize = Url::parse(&location(&response)).expect("Authorize URL should parse.");
	let state = authorize
		.query_pairs()
		.find(|(key, _)| key == "state")
		.map(|(_, value)| value.into_owned())
		.expect("Authorize URL should carry a state.");

	mock_token(server, PRIMARY_SECRET, 200, token_body(ACCESS_TOKEN, expires_in)).await;
	mock_profile(server, ACCESS_TOKEN).await;

	let response =
		get(app, &format!("/auth/linkedin/callback?code=auth-code&state={state}"), Some(&cookie))
			.await;

	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(location(&response), "/jobs");

	(cookie, session_cookie(&response))
}

/// Logs in and returns the authenticated session cookie.
pub async fn login(app: &Router, server: &MockServer, expires_in: i64) -> String {
	login_cookies(app, server, expires_in).await.1
}
