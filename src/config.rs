//! Org-level configuration consumed by [`ApiClient`](crate::client::ApiClient).
//!
//! Settings are assembled through [`OrgSettings::builder`] and validated once at build time;
//! the resulting value is immutable and shared by every Api struct cloned off the client.

// std
use std::time::Duration as StdDuration;
// self
use crate::{_prelude::*, error::ConfigError};

/// Default user agent attached to outbound requests.
pub const DEFAULT_USER_AGENT: &str = concat!("idm-admin/", env!("CARGO_PKG_VERSION"));

/// Authorization scheme used for every request.
///
/// The token is sent verbatim in the `Authorization` header; acquiring and rotating it is the
/// caller's concern.
#[derive(Clone)]
pub enum AuthScheme {
	/// Static API token, sent as `Authorization: SSWS <token>`.
	Ssws(String),
	/// OAuth 2.0 access token obtained elsewhere, sent as `Authorization: Bearer <token>`.
	Bearer(String),
}
impl AuthScheme {
	pub(crate) fn token(&self) -> &str {
		match self {
			Self::Ssws(token) | Self::Bearer(token) => token,
		}
	}

	pub(crate) fn header_value(&self) -> String {
		match self {
			Self::Ssws(token) => format!("SSWS {token}"),
			Self::Bearer(token) => format!("Bearer {token}"),
		}
	}
}
impl Debug for AuthScheme {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let scheme = match self {
			Self::Ssws(_) => "Ssws",
			Self::Bearer(_) => "Bearer",
		};

		write!(f, "AuthScheme::{scheme}(***)")
	}
}

/// Immutable org configuration shared by the invoker.
#[derive(Clone, Debug)]
pub struct OrgSettings {
	/// Validated HTTPS base URL of the org, without the API path.
	pub base_url: Url,
	/// Authorization scheme applied to every request.
	pub auth: AuthScheme,
	/// User agent header value.
	pub user_agent: String,
	/// Optional request timeout applied by the default transport.
	pub timeout: Option<StdDuration>,
	/// Headers attached to every request; per-call headers override them by name.
	pub default_headers: Vec<(String, String)>,
}
impl OrgSettings {
	/// Creates a new builder seeded with the org base URL.
	pub fn builder(base_url: impl Into<String>) -> OrgSettingsBuilder {
		OrgSettingsBuilder {
			base_url: base_url.into(),
			auth: None,
			user_agent: None,
			timeout: None,
			default_headers: Vec::new(),
		}
	}
}

/// Builder for [`OrgSettings`] values.
#[derive(Debug)]
pub struct OrgSettingsBuilder {
	base_url: String,
	auth: Option<AuthScheme>,
	user_agent: Option<String>,
	timeout: Option<StdDuration>,
	default_headers: Vec<(String, String)>,
}
impl OrgSettingsBuilder {
	/// Authenticates with a static API token (`SSWS` scheme).
	pub fn api_token(mut self, token: impl Into<String>) -> Self {
		self.auth = Some(AuthScheme::Ssws(token.into()));

		self
	}

	/// Authenticates with a pre-acquired OAuth 2.0 access token (`Bearer` scheme).
	pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
		self.auth = Some(AuthScheme::Bearer(token.into()));

		self
	}

	/// Overrides the user agent header.
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());

		self
	}

	/// Sets the request timeout applied by the default transport.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Attaches a header to every request issued through these settings.
	pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.default_headers.push((name.into(), value.into()));

		self
	}

	/// Consumes the builder and validates the resulting settings.
	pub fn build(self) -> Result<OrgSettings, ConfigError> {
		let raw = self.base_url.trim().trim_end_matches('/');

		if raw.contains('{') || raw.contains('}') {
			return Err(ConfigError::PlaceholderOrgUrl { url: raw.to_owned() });
		}

		let base_url = Url::parse(raw).map_err(|source| ConfigError::InvalidOrgUrl { source })?;

		if base_url.scheme() != "https" {
			return Err(ConfigError::InsecureOrgUrl { url: base_url.to_string() });
		}
		if base_url.path().trim_end_matches('/').ends_with("/api/v1") {
			return Err(ConfigError::OrgUrlWithApiSuffix { url: base_url.to_string() });
		}

		let auth = self.auth.ok_or(ConfigError::MissingAuthorization)?;

		if auth.token().trim().is_empty() {
			return Err(ConfigError::EmptyToken);
		}

		Ok(OrgSettings {
			base_url,
			auth,
			user_agent: self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.into()),
			timeout: self.timeout,
			default_headers: self.default_headers,
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn builder_validates_org_url() {
		let err = OrgSettings::builder("http://example.idm.local")
			.api_token("token")
			.build()
			.expect_err("Plain HTTP org URLs should be rejected.");

		assert!(matches!(err, ConfigError::InsecureOrgUrl { .. }));

		let err = OrgSettings::builder("https://{yourDomain}")
			.api_token("token")
			.build()
			.expect_err("Placeholder org URLs should be rejected.");

		assert!(matches!(err, ConfigError::PlaceholderOrgUrl { .. }));

		let err = OrgSettings::builder("https://example.idm.local/api/v1")
			.api_token("token")
			.build()
			.expect_err("Org URLs carrying the API suffix should be rejected.");

		assert!(matches!(err, ConfigError::OrgUrlWithApiSuffix { .. }));
	}

	#[test]
	fn builder_requires_a_non_empty_token() {
		let err = OrgSettings::builder("https://example.idm.local")
			.build()
			.expect_err("Missing authorization should be rejected.");

		assert!(matches!(err, ConfigError::MissingAuthorization));

		let err = OrgSettings::builder("https://example.idm.local")
			.api_token("  ")
			.build()
			.expect_err("Blank tokens should be rejected.");

		assert!(matches!(err, ConfigError::EmptyToken));
	}

	#[test]
	fn builder_applies_defaults_and_overrides() {
		let settings = OrgSettings::builder("https://example.idm.local/")
			.bearer_token("access-token")
			.default_header("x-forwarded-for", "10.0.0.1")
			.build()
			.expect("Valid settings should build successfully.");

		assert_eq!(settings.base_url.as_str(), "https://example.idm.local/");
		assert_eq!(settings.user_agent, DEFAULT_USER_AGENT);
		assert_eq!(settings.auth.header_value(), "Bearer access-token");
		assert_eq!(settings.default_headers.len(), 1);
		assert_eq!(format!("{:?}", settings.auth), "AuthScheme::Bearer(***)");
	}
}
