//! Fluent builders for common identity-provider configurations.
//!
//! Each builder accumulates fields in memory, assembles the nested
//! [`IdentityProvider`] configuration graph, and submits it through the generic
//! [`IdentityProviderApi::create_identity_provider`] operation. Nothing is validated
//! locally; business rules live server-side, and a rejected graph surfaces as the
//! service's own 4xx error.

// self
use crate::{
	_prelude::*,
	api::IdentityProviderApi,
	model::{
		IdentityProvider, IdentityProviderCredentials, IdentityProviderCredentialsClient,
		IdentityProviderPolicy, IdentityProviderType, IssuerMode, PolicyAccountLink,
		PolicyAccountLinkAction, PolicySubject, PolicySubjectMatchType, PolicyUserNameTemplate,
		Protocol, ProtocolAlgorithmType, ProtocolAlgorithmTypeSignature, ProtocolAlgorithms,
		ProtocolEndpoint, ProtocolEndpointBinding, ProtocolEndpointType, ProtocolEndpoints,
		ProtocolType, Provisioning, ProvisioningAction, ProvisioningConditions,
		ProvisioningDeprovisionedAction, ProvisioningDeprovisionedCondition, ProvisioningGroups,
		ProvisioningGroupsAction, ProvisioningSuspendedAction, ProvisioningSuspendedCondition,
		SignatureScope,
	},
};

/// Builder for a Facebook social identity provider (OAuth 2.0 protocol).
#[derive(Clone, Debug, Default)]
pub struct FacebookIdentityProviderBuilder {
	name: Option<String>,
	scopes: Option<Vec<String>>,
	client_id: Option<String>,
	client_secret: Option<String>,
	profile_master: Option<bool>,
	max_clock_skew: Option<i64>,
	user_name_template: Option<String>,
	match_type: Option<PolicySubjectMatchType>,
}
impl FacebookIdentityProviderBuilder {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the display name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}

	/// Sets the scopes requested from the provider.
	pub fn scopes<I>(mut self, scopes: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.scopes = Some(scopes.into_iter().map(Into::into).collect());

		self
	}

	/// Sets the OAuth client identifier.
	pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = Some(client_id.into());

		self
	}

	/// Sets the OAuth client secret.
	pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
		self.client_secret = Some(client_secret.into());

		self
	}

	/// Marks the provider as the profile master for provisioned users.
	pub fn profile_master(mut self, profile_master: bool) -> Self {
		self.profile_master = Some(profile_master);

		self
	}

	/// Sets the maximum tolerated clock skew, in seconds.
	pub fn max_clock_skew(mut self, max_clock_skew: i64) -> Self {
		self.max_clock_skew = Some(max_clock_skew);

		self
	}

	/// Sets the username derivation template.
	pub fn user_name_template(mut self, template: impl Into<String>) -> Self {
		self.user_name_template = Some(template.into());

		self
	}

	/// Sets the subject match strategy.
	pub fn match_type(mut self, match_type: PolicySubjectMatchType) -> Self {
		self.match_type = Some(match_type);

		self
	}

	/// Assembles the configuration graph without submitting it.
	pub fn build(&self) -> IdentityProvider {
		IdentityProvider {
			idp_type: Some(IdentityProviderType::Facebook),
			name: self.name.clone(),
			protocol: Some(Protocol {
				protocol_type: Some(ProtocolType::OAuth2),
				scopes: self.scopes.clone(),
				credentials: credentials(self.client_id.clone(), self.client_secret.clone()),
				..Default::default()
			}),
			policy: Some(default_policy(
				self.profile_master,
				self.max_clock_skew,
				self.user_name_template.clone(),
				self.match_type,
			)),
			..Default::default()
		}
	}

	/// Assembles the graph and creates the provider through `api`.
	pub async fn build_and_create(&self, api: &IdentityProviderApi) -> Result<IdentityProvider> {
		api.create_identity_provider(&self.build()).await
	}
}

/// Builder for a Google social identity provider (OpenID Connect protocol).
#[derive(Clone, Debug, Default)]
pub struct GoogleIdentityProviderBuilder {
	name: Option<String>,
	scopes: Option<Vec<String>>,
	client_id: Option<String>,
	client_secret: Option<String>,
	profile_master: Option<bool>,
	max_clock_skew: Option<i64>,
	user_name_template: Option<String>,
	match_type: Option<PolicySubjectMatchType>,
}
impl GoogleIdentityProviderBuilder {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the display name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}

	/// Sets the scopes requested from the provider.
	pub fn scopes<I>(mut self, scopes: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.scopes = Some(scopes.into_iter().map(Into::into).collect());

		self
	}

	/// Sets the OAuth client identifier.
	pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = Some(client_id.into());

		self
	}

	/// Sets the OAuth client secret.
	pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
		self.client_secret = Some(client_secret.into());

		self
	}

	/// Marks the provider as the profile master for provisioned users.
	pub fn profile_master(mut self, profile_master: bool) -> Self {
		self.profile_master = Some(profile_master);

		self
	}

	/// Sets the maximum tolerated clock skew, in seconds.
	pub fn max_clock_skew(mut self, max_clock_skew: i64) -> Self {
		self.max_clock_skew = Some(max_clock_skew);

		self
	}

	/// Sets the username derivation template.
	pub fn user_name_template(mut self, template: impl Into<String>) -> Self {
		self.user_name_template = Some(template.into());

		self
	}

	/// Sets the subject match strategy.
	pub fn match_type(mut self, match_type: PolicySubjectMatchType) -> Self {
		self.match_type = Some(match_type);

		self
	}

	/// Assembles the configuration graph without submitting it.
	pub fn build(&self) -> IdentityProvider {
		IdentityProvider {
			idp_type: Some(IdentityProviderType::Google),
			name: self.name.clone(),
			protocol: Some(Protocol {
				protocol_type: Some(ProtocolType::Oidc),
				scopes: self.scopes.clone(),
				credentials: credentials(self.client_id.clone(), self.client_secret.clone()),
				..Default::default()
			}),
			policy: Some(default_policy(
				self.profile_master,
				self.max_clock_skew,
				self.user_name_template.clone(),
				self.match_type,
			)),
			..Default::default()
		}
	}

	/// Assembles the graph and creates the provider through `api`.
	pub async fn build_and_create(&self, api: &IdentityProviderApi) -> Result<IdentityProvider> {
		api.create_identity_provider(&self.build()).await
	}
}

/// Builder for a generic OpenID Connect identity provider with explicit endpoints.
#[derive(Clone, Debug, Default)]
pub struct OidcIdentityProviderBuilder {
	name: Option<String>,
	issuer_mode: Option<IssuerMode>,
	issuer_url: Option<String>,
	scopes: Option<Vec<String>>,
	client_id: Option<String>,
	client_secret: Option<String>,
	request_signature_algorithm: Option<String>,
	response_signature_algorithm: Option<String>,
	response_signature_scope: Option<SignatureScope>,
	acs_endpoint_binding: Option<ProtocolEndpointBinding>,
	acs_endpoint_type: Option<ProtocolEndpointType>,
	authorization_endpoint_binding: Option<ProtocolEndpointBinding>,
	authorization_endpoint_url: Option<String>,
	token_endpoint_binding: Option<ProtocolEndpointBinding>,
	token_endpoint_url: Option<String>,
	user_info_endpoint_binding: Option<ProtocolEndpointBinding>,
	user_info_endpoint_url: Option<String>,
	jwks_endpoint_binding: Option<ProtocolEndpointBinding>,
	jwks_endpoint_url: Option<String>,
	profile_master: Option<bool>,
	max_clock_skew: Option<i64>,
	user_name_template: Option<String>,
	match_type: Option<PolicySubjectMatchType>,
}
impl OidcIdentityProviderBuilder {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the display name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}

	/// Sets how issuer URLs are derived.
	pub fn issuer_mode(mut self, issuer_mode: IssuerMode) -> Self {
		self.issuer_mode = Some(issuer_mode);

		self
	}

	/// Sets the provider's issuer URL.
	pub fn issuer_url(mut self, issuer_url: impl Into<String>) -> Self {
		self.issuer_url = Some(issuer_url.into());

		self
	}

	/// Sets the scopes requested from the provider.
	pub fn scopes<I>(mut self, scopes: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.scopes = Some(scopes.into_iter().map(Into::into).collect());

		self
	}

	/// Sets the OAuth client identifier.
	pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = Some(client_id.into());

		self
	}

	/// Sets the OAuth client secret.
	pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
		self.client_secret = Some(client_secret.into());

		self
	}

	/// Sets the algorithm used to sign outbound requests.
	pub fn request_signature_algorithm(mut self, algorithm: impl Into<String>) -> Self {
		self.request_signature_algorithm = Some(algorithm.into());

		self
	}

	/// Sets the algorithm required on inbound responses.
	pub fn response_signature_algorithm(mut self, algorithm: impl Into<String>) -> Self {
		self.response_signature_algorithm = Some(algorithm.into());

		self
	}

	/// Sets which inbound parts must be signed.
	pub fn response_signature_scope(mut self, scope: SignatureScope) -> Self {
		self.response_signature_scope = Some(scope);

		self
	}

	/// Sets the assertion consumer service binding.
	pub fn acs_endpoint_binding(mut self, binding: ProtocolEndpointBinding) -> Self {
		self.acs_endpoint_binding = Some(binding);

		self
	}

	/// Sets the assertion consumer service endpoint scope.
	pub fn acs_endpoint_type(mut self, endpoint_type: ProtocolEndpointType) -> Self {
		self.acs_endpoint_type = Some(endpoint_type);

		self
	}

	/// Sets the authorization endpoint binding.
	pub fn authorization_endpoint_binding(mut self, binding: ProtocolEndpointBinding) -> Self {
		self.authorization_endpoint_binding = Some(binding);

		self
	}

	/// Sets the authorization endpoint URL.
	pub fn authorization_endpoint_url(mut self, url: impl Into<String>) -> Self {
		self.authorization_endpoint_url = Some(url.into());

		self
	}

	/// Sets the token endpoint binding.
	pub fn token_endpoint_binding(mut self, binding: ProtocolEndpointBinding) -> Self {
		self.token_endpoint_binding = Some(binding);

		self
	}

	/// Sets the token endpoint URL.
	pub fn token_endpoint_url(mut self, url: impl Into<String>) -> Self {
		self.token_endpoint_url = Some(url.into());

		self
	}

	/// Sets the UserInfo endpoint binding.
	pub fn user_info_endpoint_binding(mut self, binding: ProtocolEndpointBinding) -> Self {
		self.user_info_endpoint_binding = Some(binding);

		self
	}

	/// Sets the UserInfo endpoint URL.
	pub fn user_info_endpoint_url(mut self, url: impl Into<String>) -> Self {
		self.user_info_endpoint_url = Some(url.into());

		self
	}

	/// Sets the JWKS endpoint binding.
	pub fn jwks_endpoint_binding(mut self, binding: ProtocolEndpointBinding) -> Self {
		self.jwks_endpoint_binding = Some(binding);

		self
	}

	/// Sets the JWKS endpoint URL.
	pub fn jwks_endpoint_url(mut self, url: impl Into<String>) -> Self {
		self.jwks_endpoint_url = Some(url.into());

		self
	}

	/// Marks the provider as the profile master for provisioned users.
	pub fn profile_master(mut self, profile_master: bool) -> Self {
		self.profile_master = Some(profile_master);

		self
	}

	/// Sets the maximum tolerated clock skew, in seconds.
	pub fn max_clock_skew(mut self, max_clock_skew: i64) -> Self {
		self.max_clock_skew = Some(max_clock_skew);

		self
	}

	/// Sets the username derivation template.
	pub fn user_name_template(mut self, template: impl Into<String>) -> Self {
		self.user_name_template = Some(template.into());

		self
	}

	/// Sets the subject match strategy.
	pub fn match_type(mut self, match_type: PolicySubjectMatchType) -> Self {
		self.match_type = Some(match_type);

		self
	}

	/// Assembles the configuration graph without submitting it.
	pub fn build(&self) -> IdentityProvider {
		let endpoint = |binding: Option<ProtocolEndpointBinding>, url: &Option<String>| {
			ProtocolEndpoint { binding, endpoint_type: None, url: url.clone() }
		};

		IdentityProvider {
			idp_type: Some(IdentityProviderType::Oidc),
			issuer_mode: self.issuer_mode,
			name: self.name.clone(),
			protocol: Some(Protocol {
				protocol_type: Some(ProtocolType::Oidc),
				scopes: self.scopes.clone(),
				issuer: Some(ProtocolEndpoint {
					binding: None,
					endpoint_type: None,
					url: self.issuer_url.clone(),
				}),
				endpoints: Some(ProtocolEndpoints {
					authorization: Some(endpoint(
						self.authorization_endpoint_binding,
						&self.authorization_endpoint_url,
					)),
					token: Some(endpoint(self.token_endpoint_binding, &self.token_endpoint_url)),
					user_info: Some(endpoint(
						self.user_info_endpoint_binding,
						&self.user_info_endpoint_url,
					)),
					jwks: Some(endpoint(self.jwks_endpoint_binding, &self.jwks_endpoint_url)),
					acs: Some(ProtocolEndpoint {
						binding: self.acs_endpoint_binding,
						endpoint_type: self.acs_endpoint_type,
						url: None,
					}),
				}),
				algorithms: Some(ProtocolAlgorithms {
					request: Some(ProtocolAlgorithmType {
						signature: Some(ProtocolAlgorithmTypeSignature {
							algorithm: self.request_signature_algorithm.clone(),
							scope: Some(SignatureScope::Request),
						}),
					}),
					response: Some(ProtocolAlgorithmType {
						signature: Some(ProtocolAlgorithmTypeSignature {
							algorithm: self.response_signature_algorithm.clone(),
							scope: self.response_signature_scope,
						}),
					}),
				}),
				credentials: credentials(self.client_id.clone(), self.client_secret.clone()),
			}),
			policy: Some(default_policy(
				self.profile_master,
				self.max_clock_skew,
				self.user_name_template.clone(),
				self.match_type,
			)),
			..Default::default()
		}
	}

	/// Assembles the graph and creates the provider through `api`.
	pub async fn build_and_create(&self, api: &IdentityProviderApi) -> Result<IdentityProvider> {
		api.create_identity_provider(&self.build()).await
	}
}

fn credentials(
	client_id: Option<String>,
	client_secret: Option<String>,
) -> Option<IdentityProviderCredentials> {
	Some(IdentityProviderCredentials {
		client: Some(IdentityProviderCredentialsClient { client_id, client_secret }),
	})
}

// Every builder submits the same provisioning and linking defaults: provision
// automatically, leave group memberships alone, never resurrect deprovisioned or
// suspended accounts, link matching accounts without a filter.
fn default_policy(
	profile_master: Option<bool>,
	max_clock_skew: Option<i64>,
	user_name_template: Option<String>,
	match_type: Option<PolicySubjectMatchType>,
) -> IdentityProviderPolicy {
	IdentityProviderPolicy {
		provisioning: Some(Provisioning {
			action: Some(ProvisioningAction::Auto),
			profile_master,
			groups: Some(ProvisioningGroups { action: Some(ProvisioningGroupsAction::None) }),
			conditions: Some(ProvisioningConditions {
				deprovisioned: Some(ProvisioningDeprovisionedCondition {
					action: Some(ProvisioningDeprovisionedAction::None),
				}),
				suspended: Some(ProvisioningSuspendedCondition {
					action: Some(ProvisioningSuspendedAction::None),
				}),
			}),
		}),
		account_link: Some(PolicyAccountLink {
			action: Some(PolicyAccountLinkAction::Auto),
			filter: None,
		}),
		subject: Some(PolicySubject {
			user_name_template: user_name_template
				.map(|template| PolicyUserNameTemplate { template: Some(template) }),
			match_type,
		}),
		max_clock_skew,
	}
}
