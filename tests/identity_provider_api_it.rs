// crates.io
use httpmock::prelude::*;
// self
use idm_admin::{
	_preludet::*,
	api::IdentityProviderApi,
	idp::{FacebookIdentityProviderBuilder, GoogleIdentityProviderBuilder, OidcIdentityProviderBuilder},
	model::{IdentityProviderType, LifecycleStatus, PolicySubjectMatchType},
};

fn api(server: &MockServer) -> IdentityProviderApi {
	IdentityProviderApi::new(test_api_client(&server.base_url()))
}

#[tokio::test]
async fn facebook_builder_submits_through_the_generic_create_operation() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/idps").json_body(serde_json::json!({
				"type": "FACEBOOK",
				"name": "Facebook Login",
				"protocol": {
					"type": "OAUTH2",
					"scopes": ["public_profile", "email"],
					"credentials": {
						"client": {"clientId": "fb-client", "clientSecret": "fb-secret"},
					},
				},
				"policy": {
					"provisioning": {
						"action": "AUTO",
						"profileMaster": true,
						"groups": {"action": "NONE"},
						"conditions": {
							"deprovisioned": {"action": "NONE"},
							"suspended": {"action": "NONE"},
						},
					},
					"accountLink": {"action": "AUTO"},
					"subject": {
						"userNameTemplate": {"template": "idpuser.email"},
						"matchType": "EMAIL",
					},
					"maxClockSkew": 0,
				},
			}));
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":"0oaidp1","type":"FACEBOOK","status":"ACTIVE","name":"Facebook Login"}"#);
		})
		.await;
	let created = FacebookIdentityProviderBuilder::new()
		.name("Facebook Login")
		.scopes(["public_profile", "email"])
		.client_id("fb-client")
		.client_secret("fb-secret")
		.profile_master(true)
		.max_clock_skew(0)
		.user_name_template("idpuser.email")
		.match_type(PolicySubjectMatchType::Email)
		.build_and_create(&api(&server))
		.await
		.expect("Builder submission should succeed against the mock server.");

	assert_eq!(created.id.as_deref(), Some("0oaidp1"));
	assert_eq!(created.idp_type, Some(IdentityProviderType::Facebook));

	mock.assert_async().await;
}

#[tokio::test]
async fn google_builder_marks_the_protocol_as_oidc() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v1/idps")
				.body_includes(r#""type":"GOOGLE""#)
				.body_includes(r#""protocol":{"type":"OIDC""#);
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":"0oaidp2","type":"GOOGLE","name":"Google Login"}"#);
		})
		.await;
	let created = GoogleIdentityProviderBuilder::new()
		.name("Google Login")
		.scopes(["openid", "profile", "email"])
		.client_id("g-client")
		.client_secret("g-secret")
		.build_and_create(&api(&server))
		.await
		.expect("Builder submission should succeed against the mock server.");

	assert_eq!(created.idp_type, Some(IdentityProviderType::Google));

	mock.assert_async().await;
}

#[tokio::test]
async fn oidc_builder_ships_endpoints_and_issuer() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v1/idps")
				.body_includes(r#""issuer":{"url":"https://idp.corp.example.com"}"#)
				.body_includes(r#""token":{"binding":"HTTP-POST","url":"https://idp.corp.example.com/token"}"#);
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":"0oaidp3","type":"OIDC","name":"Corporate OIDC"}"#);
		})
		.await;
	let created = OidcIdentityProviderBuilder::new()
		.name("Corporate OIDC")
		.issuer_url("https://idp.corp.example.com")
		.scopes(["openid"])
		.client_id("corp-client")
		.client_secret("corp-secret")
		.authorization_endpoint_binding(idm_admin::model::ProtocolEndpointBinding::HttpRedirect)
		.authorization_endpoint_url("https://idp.corp.example.com/authorize")
		.token_endpoint_binding(idm_admin::model::ProtocolEndpointBinding::HttpPost)
		.token_endpoint_url("https://idp.corp.example.com/token")
		.build_and_create(&api(&server))
		.await
		.expect("Builder submission should succeed against the mock server.");

	assert_eq!(created.idp_type, Some(IdentityProviderType::Oidc));

	mock.assert_async().await;
}

#[tokio::test]
async fn lifecycle_operations_return_the_updated_provider() {
	let server = MockServer::start_async().await;
	let deactivate = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/idps/0oaidp1/lifecycle/deactivate");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":"0oaidp1","type":"FACEBOOK","status":"INACTIVE"}"#);
		})
		.await;
	let updated = api(&server)
		.deactivate_identity_provider("0oaidp1")
		.await
		.expect("Deactivation should succeed against the mock server.");

	assert_eq!(updated.status, Some(LifecycleStatus::Inactive));

	deactivate.assert_async().await;
}

#[tokio::test]
async fn list_identity_providers_filters_by_kind() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/idps").query_param("type", "OIDC").query_param("limit", "5");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"[{"id":"0oaidp3","type":"OIDC","name":"Corporate OIDC"}]"#);
		})
		.await;
	let page = api(&server)
		.list_identity_providers(None, None, Some(5), Some("OIDC"))
		.await
		.expect("List request should succeed against the mock server.");

	assert_eq!(page.len(), 1);
	assert_eq!(page[0].idp_type, Some(IdentityProviderType::Oidc));

	mock.assert_async().await;
}

#[tokio::test]
async fn blank_identifiers_are_rejected_client_side() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.any_request();
			then.status(200).header("content-type", "application/json").body("{}");
		})
		.await;
	let err = api(&server)
		.get_identity_provider("")
		.await
		.expect_err("Blank identifiers should be rejected client-side.");

	assert!(matches!(err, Error::MissingParameter { name: "idp_id" }));

	mock.assert_calls_async(0).await;
}
