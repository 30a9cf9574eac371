//! Operations on profile schemas for users, groups, and application users.

// self
use crate::{
	_prelude::*,
	client::{self, ApiClient, OpRequest},
	model::{GroupSchema, UserSchema},
	transport::Method,
};

const RESOURCE: &str = "schema";

/// Api surface for profile schemas.
///
/// Updates are partial: only the properties present in the submitted schema change, which
/// is why the service models them as `POST` rather than `PUT`.
#[derive(Clone, Debug)]
pub struct SchemaApi {
	client: ApiClient,
}
impl SchemaApi {
	/// Wraps a shared client.
	pub fn new(client: ApiClient) -> Self {
		Self { client }
	}

	/// Fetches a user profile schema by id (`default` for the org schema).
	pub async fn get_user_schema(&self, schema_id: &str) -> Result<UserSchema> {
		client::require("schema_id", schema_id)?;

		let request = OpRequest::new(Method::Get, RESOURCE, "get_user_schema")
			.segments(["api", "v1", "meta", "schemas", "user"])
			.segment(schema_id);

		self.client.invoke(request).await
	}

	/// Applies a partial update to a user profile schema.
	pub async fn update_user_schema(
		&self,
		schema_id: &str,
		schema: &UserSchema,
	) -> Result<UserSchema> {
		client::require("schema_id", schema_id)?;

		let request = OpRequest::new(Method::Post, RESOURCE, "update_user_schema")
			.segments(["api", "v1", "meta", "schemas", "user"])
			.segment(schema_id)
			.json(schema)?;

		self.client.invoke(request).await
	}

	/// Fetches the org group profile schema.
	pub async fn get_group_schema(&self) -> Result<GroupSchema> {
		let request = OpRequest::new(Method::Get, RESOURCE, "get_group_schema")
			.segments(["api", "v1", "meta", "schemas", "group", "default"]);

		self.client.invoke(request).await
	}

	/// Applies a partial update to the org group profile schema.
	pub async fn update_group_schema(&self, schema: &GroupSchema) -> Result<GroupSchema> {
		let request = OpRequest::new(Method::Post, RESOURCE, "update_group_schema")
			.segments(["api", "v1", "meta", "schemas", "group", "default"])
			.json(schema)?;

		self.client.invoke(request).await
	}

	/// Fetches the default user schema of an application.
	pub async fn get_application_user_schema(&self, app_id: &str) -> Result<UserSchema> {
		client::require("app_id", app_id)?;

		let request = OpRequest::new(Method::Get, RESOURCE, "get_application_user_schema")
			.segments(["api", "v1", "meta", "schemas", "apps"])
			.segment(app_id)
			.segment("default");

		self.client.invoke(request).await
	}

	/// Applies a partial update to the default user schema of an application.
	pub async fn update_application_user_schema(
		&self,
		app_id: &str,
		schema: &UserSchema,
	) -> Result<UserSchema> {
		client::require("app_id", app_id)?;

		let request = OpRequest::new(Method::Post, RESOURCE, "update_application_user_schema")
			.segments(["api", "v1", "meta", "schemas", "apps"])
			.segment(app_id)
			.segment("default")
			.json(schema)?;

		self.client.invoke(request).await
	}
}
