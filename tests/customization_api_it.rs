// crates.io
use httpmock::prelude::*;
// self
use idm_admin::{
	_preludet::*,
	api::CustomizationApi,
	model::{SignInPageTouchPointVariant, Theme},
	transport::FilePart,
};

fn api(server: &MockServer) -> CustomizationApi {
	CustomizationApi::new(test_api_client(&server.base_url()))
}

#[tokio::test]
async fn brand_and_theme_reads_follow_the_documented_paths() {
	let server = MockServer::start_async().await;
	let brand = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/brands/bnd1").query_param("expand", "themes");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":"bnd1","name":"Default Brand","locale":"en"}"#);
		})
		.await;
	let themes = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/brands/bnd1/themes");
			then.status(200).header("content-type", "application/json").body(
				r##"[{"id":"thm1","primaryColorHex":"#1662dd","signInPageTouchPointVariant":"BACKGROUND_IMAGE"}]"##,
			);
		})
		.await;
	let api = api(&server);
	let fetched = api
		.get_brand("bnd1", Some("themes"))
		.await
		.expect("Brand fetch should succeed against the mock server.");

	assert_eq!(fetched.name.as_deref(), Some("Default Brand"));

	let theme_list = api
		.list_brand_themes("bnd1")
		.await
		.expect("Theme listing should succeed against the mock server.");

	assert_eq!(theme_list.len(), 1);
	assert_eq!(
		theme_list[0].sign_in_page_touch_point_variant,
		Some(SignInPageTouchPointVariant::BackgroundImage),
	);

	brand.assert_async().await;
	themes.assert_async().await;
}

#[tokio::test]
async fn replace_brand_theme_puts_the_variant_payload() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(PUT).path("/api/v1/brands/bnd1/themes/thm1").json_body(
				serde_json::json!({
					"primaryColorHex": "#1662dd",
					"signInPageTouchPointVariant": "BACKGROUND_SECONDARY_COLOR",
				}),
			);
			then.status(200).header("content-type", "application/json").body(
				r##"{"id":"thm1","primaryColorHex":"#1662dd","signInPageTouchPointVariant":"BACKGROUND_SECONDARY_COLOR"}"##,
			);
		})
		.await;
	let theme = Theme {
		primary_color_hex: Some("#1662dd".into()),
		sign_in_page_touch_point_variant: Some(
			SignInPageTouchPointVariant::BackgroundSecondaryColor,
		),
		..Default::default()
	};
	let replaced = api(&server)
		.replace_brand_theme("bnd1", "thm1", &theme)
		.await
		.expect("Theme replacement should succeed against the mock server.");

	assert_eq!(replaced.primary_color_hex.as_deref(), Some("#1662dd"));

	mock.assert_async().await;
}

#[tokio::test]
async fn logo_upload_sends_a_multipart_file_part() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v1/brands/bnd1/themes/thm1/logo")
				.body_includes("name=\"file\"")
				.body_includes("filename=\"logo.png\"")
				.body_includes("fake-png-bytes");
			then.status(201)
				.header("content-type", "application/json")
				.body(r#"{"url":"https://cdn.example.com/logo.png"}"#);
		})
		.await;
	let uploaded = api(&server)
		.upload_brand_theme_logo("bnd1", "thm1", FilePart::file("logo.png", "image/png", "fake-png-bytes"))
		.await
		.expect("Logo upload should succeed against the mock server.");

	assert_eq!(uploaded.url.as_deref(), Some("https://cdn.example.com/logo.png"));

	mock.assert_async().await;
}

#[tokio::test]
async fn image_deletions_hit_each_touch_point_path() {
	let server = MockServer::start_async().await;
	let logo = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/v1/brands/bnd1/themes/thm1/logo");
			then.status(204);
		})
		.await;
	let favicon = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/v1/brands/bnd1/themes/thm1/favicon");
			then.status(204);
		})
		.await;
	let background = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/v1/brands/bnd1/themes/thm1/background-image");
			then.status(204);
		})
		.await;
	let api = api(&server);

	api.delete_brand_theme_logo("bnd1", "thm1")
		.await
		.expect("Logo deletion should succeed against the mock server.");
	api.delete_brand_theme_favicon("bnd1", "thm1")
		.await
		.expect("Favicon deletion should succeed against the mock server.");
	api.delete_brand_theme_background_image("bnd1", "thm1")
		.await
		.expect("Background image deletion should succeed against the mock server.");

	logo.assert_async().await;
	favicon.assert_async().await;
	background.assert_async().await;
}

#[tokio::test]
async fn uploads_validate_identifiers_before_reading_the_file() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.any_request();
			then.status(201).header("content-type", "application/json").body("{}");
		})
		.await;
	let err = api(&server)
		.upload_brand_theme_logo("bnd1", "", FilePart::file("logo.png", "image/png", "bytes"))
		.await
		.expect_err("Blank theme identifiers should be rejected client-side.");

	assert!(matches!(err, Error::MissingParameter { name: "theme_id" }));

	mock.assert_calls_async(0).await;
}
