// crates.io
use httpmock::prelude::*;
// self
use idm_admin::{
	_preludet::*,
	api::{ApplicationApi, GroupApi},
	model::{Application, SignOnMode},
};

#[tokio::test]
async fn request_reaches_the_wire_with_documented_path_method_and_body() {
	let server = MockServer::start_async().await;
	let api = ApplicationApi::new(test_api_client(&server.base_url()));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v1/apps")
				.query_param("activate", "true")
				.header("content-type", "application/json")
				.header("authorization", format!("SSWS {TEST_API_TOKEN}"))
				.json_body(serde_json::json!({
					"label": "Expense Portal",
					"signOnMode": "OPENID_CONNECT",
				}));
			then.status(200).header("content-type", "application/json").body(
				r#"{"id":"0oa1gjh63g214q0Hq0g4","label":"Expense Portal","signOnMode":"OPENID_CONNECT","status":"ACTIVE"}"#,
			);
		})
		.await;
	let application = Application {
		label: Some("Expense Portal".into()),
		sign_on_mode: Some(SignOnMode::OpenIdConnect),
		..Default::default()
	};
	let created = api
		.create_application(&application, Some(true))
		.await
		.expect("Create request should succeed against the mock server.");

	assert_eq!(created.id.as_deref(), Some("0oa1gjh63g214q0Hq0g4"));
	assert_eq!(created.label.as_deref(), Some("Expense Portal"));

	mock.assert_async().await;
}

#[tokio::test]
async fn absent_optional_parameters_never_reach_the_query_string() {
	let server = MockServer::start_async().await;
	let api = ApplicationApi::new(test_api_client(&server.base_url()));
	let with_q = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/apps").query_param_exists("q");
			then.status(200).header("content-type", "application/json").body("[]");
		})
		.await;
	let without_q = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/apps").query_param("limit", "2");
			then.status(200).header("content-type", "application/json").body("[]");
		})
		.await;
	let page = api
		.list_applications(None, None, Some(2), None, None, None)
		.await
		.expect("List request should succeed against the mock server.");

	assert!(page.is_empty());

	with_q.assert_calls_async(0).await;
	without_q.assert_calls_async(1).await;
}

#[tokio::test]
async fn missing_required_parameter_fails_before_any_network_call() {
	let server = MockServer::start_async().await;
	let api = ApplicationApi::new(test_api_client(&server.base_url()));
	let mock = server
		.mock_async(|when, then| {
			when.any_request();
			then.status(200).header("content-type", "application/json").body("{}");
		})
		.await;
	let err = api
		.get_application("", None)
		.await
		.expect_err("Empty identifiers should be rejected client-side.");

	assert!(matches!(err, Error::MissingParameter { name: "app_id" }));
	assert_eq!(err.status(), Some(400));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn service_errors_pass_through_with_status_and_body_unchanged() {
	let server = MockServer::start_async().await;
	let api = ApplicationApi::new(test_api_client(&server.base_url()));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/apps/0oa404");
			then.status(404).header("content-type", "application/json").body(
				r#"{"errorCode":"E0000007","errorSummary":"Not found: Resource not found: 0oa404 (AppInstance)","errorId":"oaeAbC123"}"#,
			);
		})
		.await;
	let err = api
		.get_application("0oa404", None)
		.await
		.expect_err("Service errors should surface to the caller.");

	assert_eq!(err.status(), Some(404));

	let Error::Api(api_err) = err else {
		panic!("Non-success responses should classify as API errors.");
	};

	assert_eq!(api_err.body.error_code.as_deref(), Some("E0000007"));
	assert_eq!(api_err.body.error_id.as_deref(), Some("oaeAbC123"));

	mock.assert_async().await;
}

#[tokio::test]
async fn rate_limited_responses_carry_a_reset_hint_without_retrying() {
	let server = MockServer::start_async().await;
	let api = ApplicationApi::new(test_api_client(&server.base_url()));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/apps/0oa429");
			then.status(429)
				.header("content-type", "application/json")
				.header("retry-after", "30")
				.body(r#"{"errorCode":"E0000047","errorSummary":"API call exceeded rate limit"}"#);
		})
		.await;
	let err = api
		.get_application("0oa429", None)
		.await
		.expect_err("Rate-limited responses should surface as errors.");
	let Error::Api(api_err) = err else {
		panic!("Rate-limited responses should classify as API errors.");
	};

	assert_eq!(api_err.status, 429);
	assert_eq!(api_err.retry_after, Some(Duration::seconds(30)));

	// One request on the wire proves no client-side retry kicked in.
	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn malformed_response_bodies_surface_as_decode_errors() {
	let server = MockServer::start_async().await;
	let api = ApplicationApi::new(test_api_client(&server.base_url()));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/apps/0oabad");
			then.status(200).header("content-type", "application/json").body("{\"label\":");
		})
		.await;
	let err = api
		.get_application("0oabad", None)
		.await
		.expect_err("Truncated JSON should fail decoding.");

	assert!(matches!(err, Error::Decode { status: 200, .. }));

	mock.assert_async().await;
}

#[tokio::test]
async fn list_responses_expose_the_next_page_cursor() {
	let server = MockServer::start_async().await;
	let api = GroupApi::new(test_api_client(&server.base_url()));
	let next = format!("{}/api/v1/groups?after=00g2next&limit=2", server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/groups").query_param("limit", "2");
			then.status(200)
				.header("content-type", "application/json")
				.header("link", format!("<{next}>; rel=\"next\""))
				.body(
					r#"[{"id":"00g1","profile":{"name":"Everyone"}},{"id":"00g2","profile":{"name":"Admins"}}]"#,
				);
		})
		.await;
	let page = api
		.list_groups(None, None, None, None, Some(2), None, None, None)
		.await
		.expect("List request should succeed against the mock server.");

	assert_eq!(page.len(), 2);
	assert_eq!(page.after().as_deref(), Some("00g2next"));
	assert_eq!(page.next_page().map(|url| url.as_str()), Some(next.as_str()));

	mock.assert_async().await;
}
