//! User models, as returned by membership listings.

// self
use crate::_prelude::*;

/// A user account, in the shape returned by group membership listings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
	/// Unique identifier, assigned by the service.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Current account status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<UserStatus>,
	/// Creation timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub created: Option<OffsetDateTime>,
	/// Activation timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub activated: Option<OffsetDateTime>,
	/// Timestamp of the most recent login.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub last_login: Option<OffsetDateTime>,
	/// Last update timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub last_updated: Option<OffsetDateTime>,
	/// Profile attributes.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub profile: Option<UserProfile>,
}

/// Account lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
	/// Created but not activated.
	Staged,
	/// Activated, credentials not yet set.
	Provisioned,
	/// Fully active.
	Active,
	/// Password reset in progress.
	Recovery,
	/// Locked out after failed attempts.
	LockedOut,
	/// Password expired.
	PasswordExpired,
	/// Administratively suspended.
	Suspended,
	/// Deactivated.
	Deprovisioned,
}

/// Core identity attributes of a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
	/// Unique login name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub login: Option<String>,
	/// Primary email address.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	/// Given name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub first_name: Option<String>,
	/// Family name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
}
