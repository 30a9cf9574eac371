//! Group resource models.

// self
use crate::_prelude::*;

/// A group of users within the org.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Group {
	/// Unique identifier, assigned by the service.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Creation timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub created: Option<OffsetDateTime>,
	/// Last update timestamp of the profile.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub last_updated: Option<OffsetDateTime>,
	/// Last time the membership changed.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub last_membership_updated: Option<OffsetDateTime>,
	/// LDAP-style object classes describing the group.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub object_class: Option<Vec<String>>,
	/// How the group is sourced.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub group_type: Option<GroupType>,
	/// Name and description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub profile: Option<GroupProfile>,
}
impl Group {
	/// Convenience constructor for the common create/replace payload.
	pub fn with_profile(name: impl Into<String>, description: Option<String>) -> Self {
		Self {
			profile: Some(GroupProfile { name: Some(name.into()), description }),
			..Default::default()
		}
	}
}

/// Group provenance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupType {
	/// Imported from an assigned application.
	AppGroup,
	/// Managed by the service itself.
	BuiltIn,
	/// Created and administered within the org.
	UserGroup,
}

/// Name and description of a group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupProfile {
	/// Display name, unique within the org.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Optional description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}
