//! Identity provider resource models: the provider record plus its protocol and policy
//! object graphs, as assembled by the fluent builders in [`crate::idp`].

// self
use crate::{_prelude::*, model::{IssuerMode, LifecycleStatus}};

/// A federated identity provider configured for the org.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdentityProvider {
	/// Unique identifier, assigned by the service.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Provider kind.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub idp_type: Option<IdentityProviderType>,
	/// How issuer URLs are derived for this provider.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub issuer_mode: Option<IssuerMode>,
	/// Display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Lifecycle status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<LifecycleStatus>,
	/// Creation timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub created: Option<OffsetDateTime>,
	/// Last update timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub last_updated: Option<OffsetDateTime>,
	/// Federation protocol settings.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub protocol: Option<Protocol>,
	/// Provisioning and account-linking policy.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub policy: Option<IdentityProviderPolicy>,
}

/// Identity provider kinds on this surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityProviderType {
	/// Facebook social login.
	Facebook,
	/// Google social login.
	Google,
	/// LinkedIn social login.
	Linkedin,
	/// Microsoft social login.
	Microsoft,
	/// Generic OpenID Connect provider.
	Oidc,
	/// SAML 2.0 provider.
	#[serde(rename = "SAML2")]
	Saml2,
}

/// Protocol settings of an identity provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Protocol {
	/// Protocol family.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub protocol_type: Option<ProtocolType>,
	/// Scopes requested from the provider.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scopes: Option<Vec<String>>,
	/// Issuer endpoint, for providers discovered from a base URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub issuer: Option<ProtocolEndpoint>,
	/// Per-protocol endpoint set.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub endpoints: Option<ProtocolEndpoints>,
	/// Request/response signing configuration.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub algorithms: Option<ProtocolAlgorithms>,
	/// Client credentials registered with the provider.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub credentials: Option<IdentityProviderCredentials>,
}

/// Protocol families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProtocolType {
	/// Plain OAuth 2.0.
	#[serde(rename = "OAUTH2")]
	OAuth2,
	/// OpenID Connect.
	Oidc,
	/// SAML 2.0.
	#[serde(rename = "SAML2")]
	Saml2,
}

/// A single protocol endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtocolEndpoint {
	/// HTTP binding used when calling the endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub binding: Option<ProtocolEndpointBinding>,
	/// Whether the endpoint is provider-wide or org-specific.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub endpoint_type: Option<ProtocolEndpointType>,
	/// Endpoint URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
}

/// HTTP bindings for protocol endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolEndpointBinding {
	/// Form POST binding.
	#[serde(rename = "HTTP-POST")]
	HttpPost,
	/// Redirect binding.
	#[serde(rename = "HTTP-REDIRECT")]
	HttpRedirect,
}

/// Scope of a protocol endpoint definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProtocolEndpointType {
	/// Endpoint specific to this provider instance.
	Instance,
	/// Endpoint shared by the whole org.
	Org,
}

/// Endpoint set of a protocol.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtocolEndpoints {
	/// Authorization endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub authorization: Option<ProtocolEndpoint>,
	/// Token endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub token: Option<ProtocolEndpoint>,
	/// UserInfo endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_info: Option<ProtocolEndpoint>,
	/// JWKS endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jwks: Option<ProtocolEndpoint>,
	/// Assertion consumer service endpoint (SAML-style providers).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub acs: Option<ProtocolEndpoint>,
}

/// Signing configuration for requests and responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtocolAlgorithms {
	/// Outbound request signing.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub request: Option<ProtocolAlgorithmType>,
	/// Inbound response verification.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response: Option<ProtocolAlgorithmType>,
}

/// One direction's signing configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtocolAlgorithmType {
	/// Signature algorithm and scope.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub signature: Option<ProtocolAlgorithmTypeSignature>,
}

/// Signature algorithm selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtocolAlgorithmTypeSignature {
	/// Algorithm name, e.g. `SHA-256`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub algorithm: Option<String>,
	/// Which parts of the exchange are signed.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scope: Option<SignatureScope>,
}

/// Parts of an exchange covered by a signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignatureScope {
	/// Sign requests.
	Request,
	/// Sign responses.
	Response,
	/// Sign either direction.
	Any,
	/// No signing.
	None,
}

/// Client credentials registered with the provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdentityProviderCredentials {
	/// OAuth client credential pair.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client: Option<IdentityProviderCredentialsClient>,
}

/// OAuth client credential pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdentityProviderCredentialsClient {
	/// Client identifier issued by the provider.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_id: Option<String>,
	/// Client secret issued by the provider.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_secret: Option<String>,
}

/// Provisioning and account-linking policy of an identity provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdentityProviderPolicy {
	/// Just-in-time provisioning behavior.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub provisioning: Option<Provisioning>,
	/// Account linking behavior.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub account_link: Option<PolicyAccountLink>,
	/// Subject mapping behavior.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<PolicySubject>,
	/// Maximum tolerated clock skew, in seconds.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_clock_skew: Option<i64>,
}

/// Just-in-time provisioning behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Provisioning {
	/// What happens when an unknown subject signs in.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<ProvisioningAction>,
	/// Whether the provider masters the user profile.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub profile_master: Option<bool>,
	/// Group assignment behavior for provisioned users.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub groups: Option<ProvisioningGroups>,
	/// Behavior for deprovisioned or suspended accounts.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub conditions: Option<ProvisioningConditions>,
}

/// Provisioning actions for unknown subjects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProvisioningAction {
	/// Provision a new account automatically.
	Auto,
	/// Reject sign-ins from unknown subjects.
	Disabled,
}

/// Group assignment behavior for provisioned users.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProvisioningGroups {
	/// Group assignment action.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<ProvisioningGroupsAction>,
}

/// Group assignment actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProvisioningGroupsAction {
	/// Leave group memberships untouched.
	None,
	/// Append memberships asserted by the provider.
	Append,
	/// Assign a fixed set of groups.
	Assign,
	/// Mirror the provider's memberships exactly.
	SyncOnly,
}

/// Behavior for previously deprovisioned or suspended accounts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProvisioningConditions {
	/// Behavior for deprovisioned accounts.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub deprovisioned: Option<ProvisioningDeprovisionedCondition>,
	/// Behavior for suspended accounts.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub suspended: Option<ProvisioningSuspendedCondition>,
}

/// Behavior when a deprovisioned account signs in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProvisioningDeprovisionedCondition {
	/// Action taken on sign-in.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<ProvisioningDeprovisionedAction>,
}

/// Actions for deprovisioned accounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProvisioningDeprovisionedAction {
	/// Keep the account deprovisioned.
	None,
	/// Reactivate the account.
	Reactivate,
}

/// Behavior when a suspended account signs in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProvisioningSuspendedCondition {
	/// Action taken on sign-in.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<ProvisioningSuspendedAction>,
}

/// Actions for suspended accounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProvisioningSuspendedAction {
	/// Keep the account suspended.
	None,
	/// Unsuspend the account.
	Unsuspend,
}

/// Account linking behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyAccountLink {
	/// Linking action for matching accounts.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<PolicyAccountLinkAction>,
	/// Optional filter narrowing which accounts may link.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub filter: Option<PolicyAccountLinkFilter>,
}

/// Account linking actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyAccountLinkAction {
	/// Link matching accounts automatically.
	Auto,
	/// Never link automatically.
	Disabled,
}

/// Filter narrowing which accounts may link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyAccountLinkFilter {
	/// Group-based restriction.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub groups: Option<PolicyAccountLinkFilterGroups>,
}

/// Groups whose members may be linked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyAccountLinkFilterGroups {
	/// Group IDs whose members may link.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub include: Option<Vec<String>>,
}

/// Subject mapping behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicySubject {
	/// Template deriving the username from provider attributes.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_name_template: Option<PolicyUserNameTemplate>,
	/// How the derived subject is matched against existing users.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub match_type: Option<PolicySubjectMatchType>,
}

/// Username derivation template.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyUserNameTemplate {
	/// Template expression, e.g. `idpuser.email`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub template: Option<String>,
}

/// Subject match strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicySubjectMatchType {
	/// Match against usernames.
	Username,
	/// Match against primary email addresses.
	Email,
	/// Match against either usernames or email addresses.
	UsernameOrEmail,
	/// Match against a custom profile attribute.
	CustomAttribute,
}
