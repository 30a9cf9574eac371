//! Operations on the authorization server resource family, including scoped policies.

// self
use crate::{
	_prelude::*,
	client::{self, ApiClient, OpRequest},
	model::{AuthorizationServer, AuthorizationServerPolicy},
	pagination::PagedList,
	transport::Method,
};

const RESOURCE: &str = "authorization_server";

/// Api surface for custom authorization servers and their access policies.
#[derive(Clone, Debug)]
pub struct AuthorizationServerApi {
	client: ApiClient,
}
impl AuthorizationServerApi {
	/// Wraps a shared client.
	pub fn new(client: ApiClient) -> Self {
		Self { client }
	}

	/// Creates an authorization server.
	pub async fn create_authorization_server(
		&self,
		authorization_server: &AuthorizationServer,
	) -> Result<AuthorizationServer> {
		let request = OpRequest::new(Method::Post, RESOURCE, "create_authorization_server")
			.segments(["api", "v1", "authorizationServers"])
			.json(authorization_server)?;

		self.client.invoke(request).await
	}

	/// Fetches an authorization server by id.
	pub async fn get_authorization_server(
		&self,
		auth_server_id: &str,
	) -> Result<AuthorizationServer> {
		client::require("auth_server_id", auth_server_id)?;

		let request = OpRequest::new(Method::Get, RESOURCE, "get_authorization_server")
			.segments(["api", "v1", "authorizationServers"])
			.segment(auth_server_id);

		self.client.invoke(request).await
	}

	/// Lists authorization servers, one page at a time.
	pub async fn list_authorization_servers(
		&self,
		q: Option<&str>,
		limit: Option<i64>,
		after: Option<&str>,
	) -> Result<PagedList<AuthorizationServer>> {
		let request = OpRequest::new(Method::Get, RESOURCE, "list_authorization_servers")
			.segments(["api", "v1", "authorizationServers"])
			.query_opt("q", q)
			.query_opt("limit", limit)
			.query_opt("after", after);

		self.client.invoke_paged(request).await
	}

	/// Replaces an authorization server wholesale.
	pub async fn replace_authorization_server(
		&self,
		auth_server_id: &str,
		authorization_server: &AuthorizationServer,
	) -> Result<AuthorizationServer> {
		client::require("auth_server_id", auth_server_id)?;

		let request = OpRequest::new(Method::Put, RESOURCE, "replace_authorization_server")
			.segments(["api", "v1", "authorizationServers"])
			.segment(auth_server_id)
			.json(authorization_server)?;

		self.client.invoke(request).await
	}

	/// Deletes an authorization server.
	pub async fn delete_authorization_server(&self, auth_server_id: &str) -> Result<()> {
		client::require("auth_server_id", auth_server_id)?;

		let request = OpRequest::new(Method::Delete, RESOURCE, "delete_authorization_server")
			.segments(["api", "v1", "authorizationServers"])
			.segment(auth_server_id);

		self.client.invoke_unit(request).await
	}

	/// Activates an inactive authorization server.
	pub async fn activate_authorization_server(&self, auth_server_id: &str) -> Result<()> {
		client::require("auth_server_id", auth_server_id)?;

		let request = OpRequest::new(Method::Post, RESOURCE, "activate_authorization_server")
			.segments(["api", "v1", "authorizationServers"])
			.segment(auth_server_id)
			.segments(["lifecycle", "activate"]);

		self.client.invoke_unit(request).await
	}

	/// Deactivates an active authorization server.
	pub async fn deactivate_authorization_server(&self, auth_server_id: &str) -> Result<()> {
		client::require("auth_server_id", auth_server_id)?;

		let request = OpRequest::new(Method::Post, RESOURCE, "deactivate_authorization_server")
			.segments(["api", "v1", "authorizationServers"])
			.segment(auth_server_id)
			.segments(["lifecycle", "deactivate"]);

		self.client.invoke_unit(request).await
	}

	/// Lists every access policy of an authorization server.
	pub async fn list_authorization_server_policies(
		&self,
		auth_server_id: &str,
	) -> Result<Vec<AuthorizationServerPolicy>> {
		client::require("auth_server_id", auth_server_id)?;

		let request = OpRequest::new(Method::Get, RESOURCE, "list_authorization_server_policies")
			.segments(["api", "v1", "authorizationServers"])
			.segment(auth_server_id)
			.segment("policies");

		self.client.invoke(request).await
	}

	/// Creates an access policy on an authorization server.
	pub async fn create_authorization_server_policy(
		&self,
		auth_server_id: &str,
		policy: &AuthorizationServerPolicy,
	) -> Result<AuthorizationServerPolicy> {
		client::require("auth_server_id", auth_server_id)?;

		let request = OpRequest::new(Method::Post, RESOURCE, "create_authorization_server_policy")
			.segments(["api", "v1", "authorizationServers"])
			.segment(auth_server_id)
			.segment("policies")
			.json(policy)?;

		self.client.invoke(request).await
	}

	/// Fetches one access policy.
	pub async fn get_authorization_server_policy(
		&self,
		auth_server_id: &str,
		policy_id: &str,
	) -> Result<AuthorizationServerPolicy> {
		client::require("auth_server_id", auth_server_id)?;
		client::require("policy_id", policy_id)?;

		let request = OpRequest::new(Method::Get, RESOURCE, "get_authorization_server_policy")
			.segments(["api", "v1", "authorizationServers"])
			.segment(auth_server_id)
			.segment("policies")
			.segment(policy_id);

		self.client.invoke(request).await
	}

	/// Replaces one access policy wholesale.
	pub async fn replace_authorization_server_policy(
		&self,
		auth_server_id: &str,
		policy_id: &str,
		policy: &AuthorizationServerPolicy,
	) -> Result<AuthorizationServerPolicy> {
		client::require("auth_server_id", auth_server_id)?;
		client::require("policy_id", policy_id)?;

		let request = OpRequest::new(Method::Put, RESOURCE, "replace_authorization_server_policy")
			.segments(["api", "v1", "authorizationServers"])
			.segment(auth_server_id)
			.segment("policies")
			.segment(policy_id)
			.json(policy)?;

		self.client.invoke(request).await
	}

	/// Deletes one access policy.
	pub async fn delete_authorization_server_policy(
		&self,
		auth_server_id: &str,
		policy_id: &str,
	) -> Result<()> {
		client::require("auth_server_id", auth_server_id)?;
		client::require("policy_id", policy_id)?;

		let request = OpRequest::new(Method::Delete, RESOURCE, "delete_authorization_server_policy")
			.segments(["api", "v1", "authorizationServers"])
			.segment(auth_server_id)
			.segment("policies")
			.segment(policy_id);

		self.client.invoke_unit(request).await
	}

	/// Activates an inactive access policy.
	pub async fn activate_authorization_server_policy(
		&self,
		auth_server_id: &str,
		policy_id: &str,
	) -> Result<()> {
		client::require("auth_server_id", auth_server_id)?;
		client::require("policy_id", policy_id)?;

		let request =
			OpRequest::new(Method::Post, RESOURCE, "activate_authorization_server_policy")
				.segments(["api", "v1", "authorizationServers"])
				.segment(auth_server_id)
				.segment("policies")
				.segment(policy_id)
				.segments(["lifecycle", "activate"]);

		self.client.invoke_unit(request).await
	}

	/// Deactivates an active access policy.
	pub async fn deactivate_authorization_server_policy(
		&self,
		auth_server_id: &str,
		policy_id: &str,
	) -> Result<()> {
		client::require("auth_server_id", auth_server_id)?;
		client::require("policy_id", policy_id)?;

		let request =
			OpRequest::new(Method::Post, RESOURCE, "deactivate_authorization_server_policy")
				.segments(["api", "v1", "authorizationServers"])
				.segment(auth_server_id)
				.segment("policies")
				.segment(policy_id)
				.segments(["lifecycle", "deactivate"]);

		self.client.invoke_unit(request).await
	}
}
