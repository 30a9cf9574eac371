//! Profile schema models for users, groups, and application users.

// self
use crate::_prelude::*;

/// A user profile schema, either the org default or an application-scoped one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserSchema {
	/// Unique identifier, assigned by the service.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// JSON Schema dialect URI.
	#[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
	pub schema: Option<String>,
	/// Schema name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Display title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Optional description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Root JSON type, always `object`.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub schema_type: Option<String>,
	/// Creation timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub created: Option<OffsetDateTime>,
	/// Last update timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub last_updated: Option<OffsetDateTime>,
	/// Base and custom property definitions.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub definitions: Option<SchemaDefinitions>,
}

/// A group profile schema.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupSchema {
	/// Unique identifier, assigned by the service.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// JSON Schema dialect URI.
	#[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
	pub schema: Option<String>,
	/// Schema name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Display title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Optional description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Creation timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub created: Option<OffsetDateTime>,
	/// Last update timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub last_updated: Option<OffsetDateTime>,
	/// Base and custom property definitions.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub definitions: Option<SchemaDefinitions>,
}

/// Base (service-managed) and custom (org-managed) property blocks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaDefinitions {
	/// Service-managed properties; read-only on most surfaces.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub base: Option<SchemaPropertyBlock>,
	/// Org-defined custom properties.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub custom: Option<SchemaPropertyBlock>,
}

/// One block of named property definitions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaPropertyBlock {
	/// JSON pointer of the block within the schema document.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// JSON type of the block, always `object`.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub block_type: Option<String>,
	/// Property definitions keyed by attribute name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub properties: Option<BTreeMap<String, SchemaAttribute>>,
	/// Names of required attributes.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub required: Option<Vec<String>>,
}

/// Definition of a single profile attribute.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaAttribute {
	/// Display title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// JSON type of the attribute.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub attribute_type: Option<String>,
	/// Optional description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Format hint, e.g. `email` or `uri`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub format: Option<String>,
	/// Whether a value is required.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub required: Option<bool>,
	/// Mutability constraint, e.g. `READ_WRITE` or `READ_ONLY`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub mutability: Option<String>,
	/// Visibility scope, e.g. `NONE` or `SELF`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scope: Option<String>,
	/// Minimum string length.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub min_length: Option<i64>,
	/// Maximum string length.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_length: Option<i64>,
	/// Per-principal access grants.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub permissions: Option<Vec<SchemaAttributePermission>>,
	/// Which system masters the attribute value.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub master: Option<SchemaAttributeMaster>,
}

/// Access grant on a profile attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaAttributePermission {
	/// Principal the grant applies to, e.g. `SELF`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub principal: Option<String>,
	/// Granted action, e.g. `READ_WRITE` or `HIDE`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<String>,
}

/// Mastering source of a profile attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaAttributeMaster {
	/// Mastering source type, e.g. `PROFILE_MASTER`.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub master_type: Option<String>,
}
