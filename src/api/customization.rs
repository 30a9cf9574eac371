//! Operations on brands and their themes, including image uploads.

// self
use crate::{
	_prelude::*,
	client::{self, ApiClient, OpRequest},
	model::{Brand, ImageUploadResponse, Theme},
	pagination::PagedList,
	transport::{FilePart, Method},
};

const RESOURCE: &str = "customization";

/// Api surface for org branding: brands, themes, and theme images.
#[derive(Clone, Debug)]
pub struct CustomizationApi {
	client: ApiClient,
}
impl CustomizationApi {
	/// Wraps a shared client.
	pub fn new(client: ApiClient) -> Self {
		Self { client }
	}

	/// Lists brands, one page at a time.
	pub async fn list_brands(
		&self,
		after: Option<&str>,
		limit: Option<i64>,
		q: Option<&str>,
	) -> Result<PagedList<Brand>> {
		let request = OpRequest::new(Method::Get, RESOURCE, "list_brands")
			.segments(["api", "v1", "brands"])
			.query_opt("after", after)
			.query_opt("limit", limit)
			.query_opt("q", q);

		self.client.invoke_paged(request).await
	}

	/// Fetches a brand by id.
	pub async fn get_brand(&self, brand_id: &str, expand: Option<&str>) -> Result<Brand> {
		client::require("brand_id", brand_id)?;

		let request = OpRequest::new(Method::Get, RESOURCE, "get_brand")
			.segments(["api", "v1", "brands"])
			.segment(brand_id)
			.query_opt("expand", expand);

		self.client.invoke(request).await
	}

	/// Replaces a brand wholesale.
	pub async fn replace_brand(&self, brand_id: &str, brand: &Brand) -> Result<Brand> {
		client::require("brand_id", brand_id)?;

		let request = OpRequest::new(Method::Put, RESOURCE, "replace_brand")
			.segments(["api", "v1", "brands"])
			.segment(brand_id)
			.json(brand)?;

		self.client.invoke(request).await
	}

	/// Lists the themes of a brand. The collection is small and never paginated.
	pub async fn list_brand_themes(&self, brand_id: &str) -> Result<Vec<Theme>> {
		client::require("brand_id", brand_id)?;

		let request = OpRequest::new(Method::Get, RESOURCE, "list_brand_themes")
			.segments(["api", "v1", "brands"])
			.segment(brand_id)
			.segment("themes");

		self.client.invoke(request).await
	}

	/// Fetches one theme of a brand.
	pub async fn get_brand_theme(&self, brand_id: &str, theme_id: &str) -> Result<Theme> {
		client::require("brand_id", brand_id)?;
		client::require("theme_id", theme_id)?;

		let request = OpRequest::new(Method::Get, RESOURCE, "get_brand_theme")
			.segments(["api", "v1", "brands"])
			.segment(brand_id)
			.segment("themes")
			.segment(theme_id);

		self.client.invoke(request).await
	}

	/// Replaces one theme wholesale.
	pub async fn replace_brand_theme(
		&self,
		brand_id: &str,
		theme_id: &str,
		theme: &Theme,
	) -> Result<Theme> {
		client::require("brand_id", brand_id)?;
		client::require("theme_id", theme_id)?;

		let request = OpRequest::new(Method::Put, RESOURCE, "replace_brand_theme")
			.segments(["api", "v1", "brands"])
			.segment(brand_id)
			.segment("themes")
			.segment(theme_id)
			.json(theme)?;

		self.client.invoke(request).await
	}

	/// Uploads a theme logo.
	pub async fn upload_brand_theme_logo(
		&self,
		brand_id: &str,
		theme_id: &str,
		file: FilePart,
	) -> Result<ImageUploadResponse> {
		self.upload_theme_image(brand_id, theme_id, "logo", "upload_brand_theme_logo", file).await
	}

	/// Deletes a theme logo.
	pub async fn delete_brand_theme_logo(&self, brand_id: &str, theme_id: &str) -> Result<()> {
		self.delete_theme_image(brand_id, theme_id, "logo", "delete_brand_theme_logo").await
	}

	/// Uploads a theme favicon.
	pub async fn upload_brand_theme_favicon(
		&self,
		brand_id: &str,
		theme_id: &str,
		file: FilePart,
	) -> Result<ImageUploadResponse> {
		self.upload_theme_image(brand_id, theme_id, "favicon", "upload_brand_theme_favicon", file)
			.await
	}

	/// Deletes a theme favicon.
	pub async fn delete_brand_theme_favicon(&self, brand_id: &str, theme_id: &str) -> Result<()> {
		self.delete_theme_image(brand_id, theme_id, "favicon", "delete_brand_theme_favicon").await
	}

	/// Uploads a theme background image.
	pub async fn upload_brand_theme_background_image(
		&self,
		brand_id: &str,
		theme_id: &str,
		file: FilePart,
	) -> Result<ImageUploadResponse> {
		self.upload_theme_image(
			brand_id,
			theme_id,
			"background-image",
			"upload_brand_theme_background_image",
			file,
		)
		.await
	}

	/// Deletes a theme background image.
	pub async fn delete_brand_theme_background_image(
		&self,
		brand_id: &str,
		theme_id: &str,
	) -> Result<()> {
		self.delete_theme_image(
			brand_id,
			theme_id,
			"background-image",
			"delete_brand_theme_background_image",
		)
		.await
	}

	async fn upload_theme_image(
		&self,
		brand_id: &str,
		theme_id: &str,
		kind: &'static str,
		operation: &'static str,
		file: FilePart,
	) -> Result<ImageUploadResponse> {
		client::require("brand_id", brand_id)?;
		client::require("theme_id", theme_id)?;

		let request = OpRequest::new(Method::Post, RESOURCE, operation)
			.segments(["api", "v1", "brands"])
			.segment(brand_id)
			.segment("themes")
			.segment(theme_id)
			.segment(kind)
			.multipart(file);

		self.client.invoke(request).await
	}

	async fn delete_theme_image(
		&self,
		brand_id: &str,
		theme_id: &str,
		kind: &'static str,
		operation: &'static str,
	) -> Result<()> {
		client::require("brand_id", brand_id)?;
		client::require("theme_id", theme_id)?;

		let request = OpRequest::new(Method::Delete, RESOURCE, operation)
			.segments(["api", "v1", "brands"])
			.segment(brand_id)
			.segment("themes")
			.segment(theme_id)
			.segment(kind);

		self.client.invoke_unit(request).await
	}
}
