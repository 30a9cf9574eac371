//! Authorization server resource models.

// self
use crate::{_prelude::*, model::{IssuerMode, LifecycleStatus}};

/// A custom authorization server minting tokens for a set of audiences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorizationServer {
	/// Unique identifier, assigned by the service.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Optional description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Recipients the minted tokens are intended for.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub audiences: Option<Vec<String>>,
	/// Issuer URI advertised in minted tokens.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub issuer: Option<String>,
	/// How the issuer URI is derived.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub issuer_mode: Option<IssuerMode>,
	/// Lifecycle status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<LifecycleStatus>,
	/// Creation timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub created: Option<OffsetDateTime>,
	/// Last update timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub last_updated: Option<OffsetDateTime>,
	/// Token-signing key configuration.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub credentials: Option<AuthorizationServerCredentials>,
}

/// Credential block of an authorization server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorizationServerCredentials {
	/// Signing key configuration.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub signing: Option<AuthorizationServerCredentialsSigning>,
}

/// Signing key configuration and rotation state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorizationServerCredentialsSigning {
	/// Identifier of the active signing key.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub kid: Option<String>,
	/// Whether keys rotate automatically or on demand.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rotation_mode: Option<SigningRotationMode>,
	/// When the active key was last rotated.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub last_rotated: Option<OffsetDateTime>,
	/// Scheduled time of the next automatic rotation.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub next_rotation: Option<OffsetDateTime>,
}

/// Signing key rotation modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SigningRotationMode {
	/// Keys rotate on a service-managed schedule.
	Auto,
	/// Keys rotate only when an admin requests it.
	Manual,
}

/// An access policy scoped to an authorization server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorizationServerPolicy {
	/// Unique identifier, assigned by the service.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Policy type discriminator.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub policy_type: Option<PolicyType>,
	/// Display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Optional description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Evaluation priority; lower numbers evaluate first.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub priority: Option<i32>,
	/// Lifecycle status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<LifecycleStatus>,
	/// Whether the policy is service-managed and read-only.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub system: Option<bool>,
	/// Conditions controlling which requests the policy applies to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub conditions: Option<PolicyConditions>,
	/// Creation timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub created: Option<OffsetDateTime>,
	/// Last update timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub last_updated: Option<OffsetDateTime>,
}

/// Policy type discriminators on this surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyType {
	/// Access policy evaluated when minting OAuth 2.0 tokens.
	OauthAuthorizationPolicy,
}

/// Condition block of an authorization server policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyConditions {
	/// Client allowlist condition.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub clients: Option<ClientCondition>,
}

/// Clients a policy applies to; `ALL_CLIENTS` matches every client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientCondition {
	/// Client IDs (or the `ALL_CLIENTS` sentinel) the policy applies to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub include: Option<Vec<String>>,
}
