//! Resource set models for custom admin-role scoping.

// self
use crate::_prelude::*;

/// A named collection of resources that custom admin roles can be bound to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceSet {
	/// Unique identifier, assigned by the service.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Display label, unique within the org.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Optional description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Creation timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub created: Option<OffsetDateTime>,
	/// Last update timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub last_updated: Option<OffsetDateTime>,
}

/// A single resource tracked inside a resource set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceSetResource {
	/// Unique identifier of the membership entry.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// URL of the resource being scoped, as submitted on addition.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub resource: Option<String>,
	/// Creation timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub created: Option<OffsetDateTime>,
	/// Last update timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub last_updated: Option<OffsetDateTime>,
}

/// Patch payload adding resources to a set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceSetResourcePatchRequest {
	/// Resource URLs to add to the set.
	pub additions: Vec<String>,
}
