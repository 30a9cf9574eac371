//! Operations on the group resource family.

// self
use crate::{
	_prelude::*,
	client::{self, ApiClient, OpRequest},
	model::{Group, User},
	pagination::PagedList,
	transport::Method,
};

const RESOURCE: &str = "group";

/// Api surface for groups and their memberships.
#[derive(Clone, Debug)]
pub struct GroupApi {
	client: ApiClient,
}
impl GroupApi {
	/// Wraps a shared client.
	pub fn new(client: ApiClient) -> Self {
		Self { client }
	}

	/// Creates a group.
	pub async fn create_group(&self, group: &Group) -> Result<Group> {
		let request = OpRequest::new(Method::Post, RESOURCE, "create_group")
			.segments(["api", "v1", "groups"])
			.json(group)?;

		self.client.invoke(request).await
	}

	/// Fetches a group by id.
	pub async fn get_group(&self, group_id: &str) -> Result<Group> {
		client::require("group_id", group_id)?;

		let request = OpRequest::new(Method::Get, RESOURCE, "get_group")
			.segments(["api", "v1", "groups"])
			.segment(group_id);

		self.client.invoke(request).await
	}

	/// Lists groups matching the given lookup expressions, one page at a time.
	#[allow(clippy::too_many_arguments)]
	pub async fn list_groups(
		&self,
		q: Option<&str>,
		filter: Option<&str>,
		search: Option<&str>,
		after: Option<&str>,
		limit: Option<i64>,
		sort_by: Option<&str>,
		sort_order: Option<&str>,
		expand: Option<&str>,
	) -> Result<PagedList<Group>> {
		let request = OpRequest::new(Method::Get, RESOURCE, "list_groups")
			.segments(["api", "v1", "groups"])
			.query_opt("q", q)
			.query_opt("filter", filter)
			.query_opt("search", search)
			.query_opt("after", after)
			.query_opt("limit", limit)
			.query_opt("sortBy", sort_by)
			.query_opt("sortOrder", sort_order)
			.query_opt("expand", expand);

		self.client.invoke_paged(request).await
	}

	/// Replaces a group's profile wholesale.
	pub async fn replace_group(&self, group_id: &str, group: &Group) -> Result<Group> {
		client::require("group_id", group_id)?;

		let request = OpRequest::new(Method::Put, RESOURCE, "replace_group")
			.segments(["api", "v1", "groups"])
			.segment(group_id)
			.json(group)?;

		self.client.invoke(request).await
	}

	/// Deletes a group.
	pub async fn delete_group(&self, group_id: &str) -> Result<()> {
		client::require("group_id", group_id)?;

		let request = OpRequest::new(Method::Delete, RESOURCE, "delete_group")
			.segments(["api", "v1", "groups"])
			.segment(group_id);

		self.client.invoke_unit(request).await
	}

	/// Lists the members of a group, one page at a time.
	pub async fn list_group_users(
		&self,
		group_id: &str,
		after: Option<&str>,
		limit: Option<i64>,
	) -> Result<PagedList<User>> {
		client::require("group_id", group_id)?;

		let request = OpRequest::new(Method::Get, RESOURCE, "list_group_users")
			.segments(["api", "v1", "groups"])
			.segment(group_id)
			.segment("users")
			.query_opt("after", after)
			.query_opt("limit", limit);

		self.client.invoke_paged(request).await
	}

	/// Adds a user to a group.
	pub async fn assign_user_to_group(&self, group_id: &str, user_id: &str) -> Result<()> {
		client::require("group_id", group_id)?;
		client::require("user_id", user_id)?;

		let request = OpRequest::new(Method::Put, RESOURCE, "assign_user_to_group")
			.segments(["api", "v1", "groups"])
			.segment(group_id)
			.segment("users")
			.segment(user_id);

		self.client.invoke_unit(request).await
	}

	/// Removes a user from a group.
	pub async fn unassign_user_from_group(&self, group_id: &str, user_id: &str) -> Result<()> {
		client::require("group_id", group_id)?;
		client::require("user_id", user_id)?;

		let request = OpRequest::new(Method::Delete, RESOURCE, "unassign_user_from_group")
			.segments(["api", "v1", "groups"])
			.segment(group_id)
			.segment("users")
			.segment(user_id);

		self.client.invoke_unit(request).await
	}
}
