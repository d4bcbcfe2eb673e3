mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
use time::{Duration, OffsetDateTime};
// self
use common::*;
use linkedin_job_proxy::error::{Error, UpstreamError};

#[tokio::test]
async fn primary_secret_exchange_yields_an_active_grant() {
	let server = MockServer::start_async().await;
	let client = linkedin_client(&server, Some(SECONDARY_SECRET));
	let primary = mock_token(&server, PRIMARY_SECRET, 200, token_body(ACCESS_TOKEN, 3600)).await;
	let secondary =
		mock_token(&server, SECONDARY_SECRET, 200, token_body("secondary-token", 3600)).await;
	let before = OffsetDateTime::now_utc();
	let grant = client.exchange_code("auth-code").await.expect("Exchange should succeed.");

	primary.assert_async().await;
	secondary.assert_calls_async(0).await;

	assert_eq!(grant.access_token().expose(), ACCESS_TOKEN);
	assert!(grant.expires_at >= before + Duration::seconds(3600));
	assert!(grant.expires_at > OffsetDateTime::now_utc());
}

#[tokio::test]
async fn exchange_posts_the_full_authorization_code_form() {
	let server = MockServer::start_async().await;
	let client = linkedin_client(&server, None);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/v2/accessToken")
				.form_urlencoded_tuple("grant_type", "authorization_code")
				.form_urlencoded_tuple("code", "auth-code")
				.form_urlencoded_tuple("client_id", CLIENT_ID)
				.form_urlencoded_tuple("client_secret", PRIMARY_SECRET)
				.form_urlencoded_tuple("redirect_uri", REDIRECT_URI);
			then.status(200)
				.header("content-type", "application/json")
				.body(token_body(ACCESS_TOKEN, 60).to_string());
		})
		.await;

	client.exchange_code("auth-code").await.expect("Exchange should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn rejected_primary_falls_back_to_secondary_once() {
	let server = MockServer::start_async().await;
	let client = linkedin_client(&server, Some(SECONDARY_SECRET));
	let primary = mock_token(
		&server,
		PRIMARY_SECRET,
		401,
		json!({ "error": "invalid_client", "error_description": "Client authentication failed" }),
	)
	.await;
	let secondary =
		mock_token(&server, SECONDARY_SECRET, 200, token_body("secondary-token", 3600)).await;
	let grant = client.exchange_code("auth-code").await.expect("Fallback should succeed.");

	primary.assert_calls_async(1).await;
	secondary.assert_calls_async(1).await;

	assert_eq!(grant.access_token().expose(), "secondary-token");
}

#[tokio::test]
async fn malformed_primary_body_also_triggers_the_fallback() {
	let server = MockServer::start_async().await;
	let client = linkedin_client(&server, Some(SECONDARY_SECRET));
	let primary = mock_token(&server, PRIMARY_SECRET, 200, json!({ "unexpected": true })).await;
	let secondary =
		mock_token(&server, SECONDARY_SECRET, 200, token_body("secondary-token", 3600)).await;
	let grant = client.exchange_code("auth-code").await.expect("Fallback should succeed.");

	primary.assert_calls_async(1).await;
	secondary.assert_calls_async(1).await;

	assert_eq!(grant.access_token().expose(), "secondary-token");
}

#[tokio::test]
async fn both_secrets_rejected_surfaces_the_secondary_failure() {
	let server = MockServer::start_async().await;
	let client = linkedin_client(&server, Some(SECONDARY_SECRET));
	let primary =
		mock_token(&server, PRIMARY_SECRET, 401, json!({ "error": "invalid_client" })).await;
	let secondary =
		mock_token(&server, SECONDARY_SECRET, 400, json!({ "error": "invalid_grant" })).await;
	let err = client.exchange_code("auth-code").await.expect_err("Exchange should fail.");

	primary.assert_calls_async(1).await;
	secondary.assert_calls_async(1).await;

	assert!(matches!(err, Error::TokenExchange(UpstreamError::Status { status: 400, .. })));
}

#[tokio::test]
async fn missing_secondary_fails_after_a_single_attempt() {
	let server = MockServer::start_async().await;
	let client = linkedin_client(&server, None);
	let primary =
		mock_token(&server, PRIMARY_SECRET, 401, json!({ "error": "invalid_client" })).await;
	let err = client.exchange_code("auth-code").await.expect_err("Exchange should fail.");

	primary.assert_calls_async(1).await;

	assert_eq!(err.upstream_status(), Some(401));
	assert!(matches!(err, Error::TokenExchange(_)));
}

#[tokio::test]
async fn non_positive_lifetimes_are_rejected() {
	let server = MockServer::start_async().await;
	let client = linkedin_client(&server, None);

	mock_token(&server, PRIMARY_SECRET, 200, token_body(ACCESS_TOKEN, 0)).await;

	let err = client.exchange_code("auth-code").await.expect_err("Zero lifetime should fail.");

	assert!(matches!(err, Error::TokenExchange(UpstreamError::NonPositiveExpiresIn)));
}
