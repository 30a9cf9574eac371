//! Operations on the resource set family used by custom admin roles.

// self
use crate::{
	_prelude::*,
	client::{self, ApiClient, OpRequest},
	model::{ResourceSet, ResourceSetResource, ResourceSetResourcePatchRequest},
	pagination::PagedList,
	transport::Method,
};

const RESOURCE: &str = "resource_set";

/// Api surface for resource sets and their member resources.
#[derive(Clone, Debug)]
pub struct ResourceSetApi {
	client: ApiClient,
}
impl ResourceSetApi {
	/// Wraps a shared client.
	pub fn new(client: ApiClient) -> Self {
		Self { client }
	}

	/// Creates a resource set.
	pub async fn create_resource_set(&self, resource_set: &ResourceSet) -> Result<ResourceSet> {
		let request = OpRequest::new(Method::Post, RESOURCE, "create_resource_set")
			.segments(["api", "v1", "iam", "resource-sets"])
			.json(resource_set)?;

		self.client.invoke(request).await
	}

	/// Fetches a resource set by id.
	pub async fn get_resource_set(&self, resource_set_id: &str) -> Result<ResourceSet> {
		client::require("resource_set_id", resource_set_id)?;

		let request = OpRequest::new(Method::Get, RESOURCE, "get_resource_set")
			.segments(["api", "v1", "iam", "resource-sets"])
			.segment(resource_set_id);

		self.client.invoke(request).await
	}

	/// Lists resource sets, one page at a time.
	pub async fn list_resource_sets(&self, after: Option<&str>) -> Result<PagedList<ResourceSet>> {
		let request = OpRequest::new(Method::Get, RESOURCE, "list_resource_sets")
			.segments(["api", "v1", "iam", "resource-sets"])
			.query_opt("after", after);

		self.client.invoke_paged(request).await
	}

	/// Replaces a resource set's label and description wholesale.
	pub async fn replace_resource_set(
		&self,
		resource_set_id: &str,
		resource_set: &ResourceSet,
	) -> Result<ResourceSet> {
		client::require("resource_set_id", resource_set_id)?;

		let request = OpRequest::new(Method::Put, RESOURCE, "replace_resource_set")
			.segments(["api", "v1", "iam", "resource-sets"])
			.segment(resource_set_id)
			.json(resource_set)?;

		self.client.invoke(request).await
	}

	/// Deletes a resource set.
	pub async fn delete_resource_set(&self, resource_set_id: &str) -> Result<()> {
		client::require("resource_set_id", resource_set_id)?;

		let request = OpRequest::new(Method::Delete, RESOURCE, "delete_resource_set")
			.segments(["api", "v1", "iam", "resource-sets"])
			.segment(resource_set_id);

		self.client.invoke_unit(request).await
	}

	/// Lists the resources tracked by a set, one page at a time.
	pub async fn list_resource_set_resources(
		&self,
		resource_set_id: &str,
		after: Option<&str>,
		limit: Option<i64>,
	) -> Result<PagedList<ResourceSetResource>> {
		client::require("resource_set_id", resource_set_id)?;

		let request = OpRequest::new(Method::Get, RESOURCE, "list_resource_set_resources")
			.segments(["api", "v1", "iam", "resource-sets"])
			.segment(resource_set_id)
			.segment("resources")
			.query_opt("after", after)
			.query_opt("limit", limit);

		self.client.invoke_paged(request).await
	}

	/// Adds resources to a set.
	pub async fn add_resource_set_resources(
		&self,
		resource_set_id: &str,
		patch: &ResourceSetResourcePatchRequest,
	) -> Result<ResourceSet> {
		client::require("resource_set_id", resource_set_id)?;

		let request = OpRequest::new(Method::Patch, RESOURCE, "add_resource_set_resources")
			.segments(["api", "v1", "iam", "resource-sets"])
			.segment(resource_set_id)
			.segment("resources")
			.json(patch)?;

		self.client.invoke(request).await
	}

	/// Removes one resource from a set.
	pub async fn delete_resource_set_resource(
		&self,
		resource_set_id: &str,
		resource_id: &str,
	) -> Result<()> {
		client::require("resource_set_id", resource_set_id)?;
		client::require("resource_id", resource_id)?;

		let request = OpRequest::new(Method::Delete, RESOURCE, "delete_resource_set_resource")
			.segments(["api", "v1", "iam", "resource-sets"])
			.segment(resource_set_id)
			.segment("resources")
			.segment(resource_id);

		self.client.invoke_unit(request).await
	}
}
