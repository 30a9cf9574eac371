//! Operations on the application resource family.

// self
use crate::{
	_prelude::*,
	client::{self, ApiClient, OpRequest},
	model::Application,
	pagination::PagedList,
	transport::Method,
};

const RESOURCE: &str = "application";

/// Api surface for applications registered with the org.
#[derive(Clone, Debug)]
pub struct ApplicationApi {
	client: ApiClient,
}
impl ApplicationApi {
	/// Wraps a shared client.
	pub fn new(client: ApiClient) -> Self {
		Self { client }
	}

	/// Creates an application. `activate` controls whether it goes live immediately.
	pub async fn create_application(
		&self,
		application: &Application,
		activate: Option<bool>,
	) -> Result<Application> {
		let request = OpRequest::new(Method::Post, RESOURCE, "create_application")
			.segments(["api", "v1", "apps"])
			.query_opt("activate", activate)
			.json(application)?;

		self.client.invoke(request).await
	}

	/// Fetches an application by id.
	pub async fn get_application(&self, app_id: &str, expand: Option<&str>) -> Result<Application> {
		client::require("app_id", app_id)?;

		let request = OpRequest::new(Method::Get, RESOURCE, "get_application")
			.segments(["api", "v1", "apps"])
			.segment(app_id)
			.query_opt("expand", expand);

		self.client.invoke(request).await
	}

	/// Lists applications, newest first, one page at a time.
	pub async fn list_applications(
		&self,
		q: Option<&str>,
		after: Option<&str>,
		limit: Option<i64>,
		filter: Option<&str>,
		expand: Option<&str>,
		include_non_deleted: Option<bool>,
	) -> Result<PagedList<Application>> {
		let request = OpRequest::new(Method::Get, RESOURCE, "list_applications")
			.segments(["api", "v1", "apps"])
			.query_opt("q", q)
			.query_opt("after", after)
			.query_opt("limit", limit)
			.query_opt("filter", filter)
			.query_opt("expand", expand)
			.query_opt("includeNonDeleted", include_non_deleted);

		self.client.invoke_paged(request).await
	}

	/// Replaces an application wholesale.
	pub async fn replace_application(
		&self,
		app_id: &str,
		application: &Application,
	) -> Result<Application> {
		client::require("app_id", app_id)?;

		let request = OpRequest::new(Method::Put, RESOURCE, "replace_application")
			.segments(["api", "v1", "apps"])
			.segment(app_id)
			.json(application)?;

		self.client.invoke(request).await
	}

	/// Deletes an inactive application.
	pub async fn delete_application(&self, app_id: &str) -> Result<()> {
		client::require("app_id", app_id)?;

		let request = OpRequest::new(Method::Delete, RESOURCE, "delete_application")
			.segments(["api", "v1", "apps"])
			.segment(app_id);

		self.client.invoke_unit(request).await
	}

	/// Activates an inactive application.
	pub async fn activate_application(&self, app_id: &str) -> Result<()> {
		client::require("app_id", app_id)?;

		let request = OpRequest::new(Method::Post, RESOURCE, "activate_application")
			.segments(["api", "v1", "apps"])
			.segment(app_id)
			.segments(["lifecycle", "activate"]);

		self.client.invoke_unit(request).await
	}

	/// Deactivates an active application.
	pub async fn deactivate_application(&self, app_id: &str) -> Result<()> {
		client::require("app_id", app_id)?;

		let request = OpRequest::new(Method::Post, RESOURCE, "deactivate_application")
			.segments(["api", "v1", "apps"])
			.segment(app_id)
			.segments(["lifecycle", "deactivate"]);

		self.client.invoke_unit(request).await
	}
}
