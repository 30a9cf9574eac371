//! Operations on the identity provider resource family.

// self
use crate::{
	_prelude::*,
	client::{self, ApiClient, OpRequest},
	model::IdentityProvider,
	pagination::PagedList,
	transport::Method,
};

const RESOURCE: &str = "identity_provider";

/// Api surface for federated identity providers.
///
/// [`create_identity_provider`](Self::create_identity_provider) is also the single
/// submission point used by the fluent builders in [`crate::idp`].
#[derive(Clone, Debug)]
pub struct IdentityProviderApi {
	client: ApiClient,
}
impl IdentityProviderApi {
	/// Wraps a shared client.
	pub fn new(client: ApiClient) -> Self {
		Self { client }
	}

	/// Creates an identity provider from a fully assembled configuration graph.
	pub async fn create_identity_provider(
		&self,
		identity_provider: &IdentityProvider,
	) -> Result<IdentityProvider> {
		let request = OpRequest::new(Method::Post, RESOURCE, "create_identity_provider")
			.segments(["api", "v1", "idps"])
			.json(identity_provider)?;

		self.client.invoke(request).await
	}

	/// Fetches an identity provider by id.
	pub async fn get_identity_provider(&self, idp_id: &str) -> Result<IdentityProvider> {
		client::require("idp_id", idp_id)?;

		let request = OpRequest::new(Method::Get, RESOURCE, "get_identity_provider")
			.segments(["api", "v1", "idps"])
			.segment(idp_id);

		self.client.invoke(request).await
	}

	/// Lists identity providers, optionally filtered by kind, one page at a time.
	pub async fn list_identity_providers(
		&self,
		q: Option<&str>,
		after: Option<&str>,
		limit: Option<i64>,
		idp_type: Option<&str>,
	) -> Result<PagedList<IdentityProvider>> {
		let request = OpRequest::new(Method::Get, RESOURCE, "list_identity_providers")
			.segments(["api", "v1", "idps"])
			.query_opt("q", q)
			.query_opt("after", after)
			.query_opt("limit", limit)
			.query_opt("type", idp_type);

		self.client.invoke_paged(request).await
	}

	/// Replaces an identity provider wholesale.
	pub async fn replace_identity_provider(
		&self,
		idp_id: &str,
		identity_provider: &IdentityProvider,
	) -> Result<IdentityProvider> {
		client::require("idp_id", idp_id)?;

		let request = OpRequest::new(Method::Put, RESOURCE, "replace_identity_provider")
			.segments(["api", "v1", "idps"])
			.segment(idp_id)
			.json(identity_provider)?;

		self.client.invoke(request).await
	}

	/// Deletes an identity provider.
	pub async fn delete_identity_provider(&self, idp_id: &str) -> Result<()> {
		client::require("idp_id", idp_id)?;

		let request = OpRequest::new(Method::Delete, RESOURCE, "delete_identity_provider")
			.segments(["api", "v1", "idps"])
			.segment(idp_id);

		self.client.invoke_unit(request).await
	}

	/// Activates an inactive identity provider.
	pub async fn activate_identity_provider(&self, idp_id: &str) -> Result<IdentityProvider> {
		client::require("idp_id", idp_id)?;

		let request = OpRequest::new(Method::Post, RESOURCE, "activate_identity_provider")
			.segments(["api", "v1", "idps"])
			.segment(idp_id)
			.segments(["lifecycle", "activate"]);

		self.client.invoke(request).await
	}

	/// Deactivates an active identity provider.
	pub async fn deactivate_identity_provider(&self, idp_id: &str) -> Result<IdentityProvider> {
		client::require("idp_id", idp_id)?;

		let request = OpRequest::new(Method::Post, RESOURCE, "deactivate_identity_provider")
			.segments(["api", "v1", "idps"])
			.segment(idp_id)
			.segments(["lifecycle", "deactivate"]);

		self.client.invoke(request).await
	}
}
