// crates.io
use httpmock::prelude::*;
// self
use idm_admin::{
	_preludet::*,
	api::ResourceSetApi,
	model::{ResourceSet, ResourceSetResourcePatchRequest},
};

fn api(server: &MockServer) -> ResourceSetApi {
	ResourceSetApi::new(test_api_client(&server.base_url()))
}

#[tokio::test]
async fn create_resource_set_posts_to_the_iam_path() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/iam/resource-sets").json_body(serde_json::json!({
				"label": "Helpdesk Apps",
				"description": "Applications the helpdesk role may administer",
			}));
			then.status(200).header("content-type", "application/json").body(
				r#"{"id":"iamr1","label":"Helpdesk Apps","description":"Applications the helpdesk role may administer"}"#,
			);
		})
		.await;
	let resource_set = ResourceSet {
		label: Some("Helpdesk Apps".into()),
		description: Some("Applications the helpdesk role may administer".into()),
		..Default::default()
	};
	let created = api(&server)
		.create_resource_set(&resource_set)
		.await
		.expect("Create request should succeed against the mock server.");

	assert_eq!(created.id.as_deref(), Some("iamr1"));

	mock.assert_async().await;
}

#[tokio::test]
async fn resource_membership_operations_target_the_resources_subresource() {
	let server = MockServer::start_async().await;
	let add = server
		.mock_async(|when, then| {
			when.method(PATCH).path("/api/v1/iam/resource-sets/iamr1/resources").json_body(
				serde_json::json!({
					"additions": [
						"https://org.example.com/api/v1/apps/0oa1",
						"https://org.example.com/api/v1/apps/0oa2",
					],
				}),
			);
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":"iamr1","label":"Helpdesk Apps"}"#);
		})
		.await;
	let list = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/v1/iam/resource-sets/iamr1/resources")
				.query_param("limit", "10");
			then.status(200).header("content-type", "application/json").body(
				r#"[{"id":"irs1","resource":"https://org.example.com/api/v1/apps/0oa1"}]"#,
			);
		})
		.await;
	let remove = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/v1/iam/resource-sets/iamr1/resources/irs1");
			then.status(204);
		})
		.await;
	let api = api(&server);
	let patch = ResourceSetResourcePatchRequest {
		additions: vec![
			"https://org.example.com/api/v1/apps/0oa1".into(),
			"https://org.example.com/api/v1/apps/0oa2".into(),
		],
	};

	api.add_resource_set_resources("iamr1", &patch)
		.await
		.expect("Resource addition should succeed against the mock server.");

	let resources = api
		.list_resource_set_resources("iamr1", None, Some(10))
		.await
		.expect("Resource listing should succeed against the mock server.");

	assert_eq!(resources.len(), 1);
	assert_eq!(
		resources[0].resource.as_deref(),
		Some("https://org.example.com/api/v1/apps/0oa1"),
	);

	api.delete_resource_set_resource("iamr1", "irs1")
		.await
		.expect("Resource removal should succeed against the mock server.");

	add.assert_async().await;
	list.assert_async().await;
	remove.assert_async().await;
}

#[tokio::test]
async fn list_resource_sets_paginates_with_the_after_cursor() {
	let server = MockServer::start_async().await;
	let next = format!("{}/api/v1/iam/resource-sets?after=iamr2", server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/iam/resource-sets");
			then.status(200)
				.header("content-type", "application/json")
				.header("link", format!("<{next}>; rel=\"next\""))
				.body(r#"[{"id":"iamr1","label":"Helpdesk Apps"},{"id":"iamr2","label":"Billing Apps"}]"#);
		})
		.await;
	let page = api(&server)
		.list_resource_sets(None)
		.await
		.expect("List request should succeed against the mock server.");

	assert_eq!(page.len(), 2);
	assert_eq!(page.after().as_deref(), Some("iamr2"));

	mock.assert_async().await;
}

#[tokio::test]
async fn blank_identifiers_are_rejected_client_side() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.any_request();
			then.status(204);
		})
		.await;
	let api = api(&server);

	assert!(matches!(
		api.get_resource_set("").await,
		Err(Error::MissingParameter { name: "resource_set_id" }),
	));
	assert!(matches!(
		api.delete_resource_set_resource("iamr1", "").await,
		Err(Error::MissingParameter { name: "resource_id" }),
	));

	mock.assert_calls_async(0).await;
}
