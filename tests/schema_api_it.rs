// crates.io
use httpmock::prelude::*;
// self
use idm_admin::{
	_preludet::*,
	api::SchemaApi,
	model::{SchemaAttribute, SchemaDefinitions, SchemaPropertyBlock, UserSchema},
};

fn api(server: &MockServer) -> SchemaApi {
	SchemaApi::new(test_api_client(&server.base_url()))
}

#[tokio::test]
async fn get_user_schema_reads_the_default_schema_document() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/meta/schemas/user/default");
			then.status(200).header("content-type", "application/json").body(
				r##"{
					"id": "https://org.example.com/meta/schemas/user/default",
					"$schema": "http://json-schema.org/draft-04/schema#",
					"name": "user",
					"title": "User",
					"definitions": {
						"base": {
							"id": "#base",
							"type": "object",
							"properties": {
								"login": {
									"title": "Username",
									"type": "string",
									"required": true,
									"minLength": 5,
									"maxLength": 100,
									"permissions": [{"principal": "SELF", "action": "READ_ONLY"}]
								}
							},
							"required": ["login"]
						}
					}
				}"##,
			);
		})
		.await;
	let schema = api(&server)
		.get_user_schema("default")
		.await
		.expect("Schema fetch should succeed against the mock server.");
	let base = schema
		.definitions
		.and_then(|definitions| definitions.base)
		.expect("Base definitions should be present.");
	let login = base
		.properties
		.as_ref()
		.and_then(|properties| properties.get("login"))
		.expect("The login attribute should be present.");

	assert_eq!(login.title.as_deref(), Some("Username"));
	assert_eq!(login.min_length, Some(5));
	assert_eq!(base.required, Some(vec!["login".to_owned()]));

	mock.assert_async().await;
}

#[tokio::test]
async fn update_user_schema_posts_a_partial_document() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/meta/schemas/user/default").json_body(
				serde_json::json!({
					"definitions": {
						"custom": {
							"properties": {
								"costCenter": {
									"title": "Cost Center",
									"type": "string",
								},
							},
						},
					},
				}),
			);
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":"https://org.example.com/meta/schemas/user/default","name":"user"}"#);
		})
		.await;
	let schema = UserSchema {
		definitions: Some(SchemaDefinitions {
			custom: Some(SchemaPropertyBlock {
				properties: Some(
					[(
						"costCenter".to_owned(),
						SchemaAttribute {
							title: Some("Cost Center".into()),
							attribute_type: Some("string".into()),
							..Default::default()
						},
					)]
					.into(),
				),
				..Default::default()
			}),
			..Default::default()
		}),
		..Default::default()
	};
	let updated = api(&server)
		.update_user_schema("default", &schema)
		.await
		.expect("Schema update should succeed against the mock server.");

	assert_eq!(updated.name.as_deref(), Some("user"));

	mock.assert_async().await;
}

#[tokio::test]
async fn group_and_application_schemas_use_their_own_paths() {
	let server = MockServer::start_async().await;
	let group = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/meta/schemas/group/default");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":"https://org.example.com/meta/schemas/group/default","name":"group"}"#);
		})
		.await;
	let app = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/meta/schemas/apps/0oa1/default");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":"https://org.example.com/meta/schemas/apps/0oa1/default","name":"appuser"}"#);
		})
		.await;
	let api = api(&server);
	let group_schema = api
		.get_group_schema()
		.await
		.expect("Group schema fetch should succeed against the mock server.");

	assert_eq!(group_schema.name.as_deref(), Some("group"));

	let app_schema = api
		.get_application_user_schema("0oa1")
		.await
		.expect("Application schema fetch should succeed against the mock server.");

	assert_eq!(app_schema.name.as_deref(), Some("appuser"));

	group.assert_async().await;
	app.assert_async().await;
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
	let api = api(&server);

	assert!(matches!(
		api.get_user_schema("").await,
		Err(Error::MissingParameter { name: "schema_id" }),
	));
	assert!(matches!(
		api.get_application_user_schema(" ").await,
		Err(Error::MissingParameter { name: "app_id" }),
	));

	mock.assert_calls_async(0).await;
}
