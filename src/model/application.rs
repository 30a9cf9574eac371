//! Application resource models.

// self
use crate::{_prelude::*, model::LifecycleStatus};

/// An application registered with the org.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Application {
	/// Unique identifier, assigned by the service.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Human-readable label, unique within the org.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Catalog name of the application integration.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Lifecycle status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<LifecycleStatus>,
	/// Authentication mode used when signing users in.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sign_on_mode: Option<SignOnMode>,
	/// Feature flags enabled on the application.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub features: Option<Vec<String>>,
	/// Creation timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub created: Option<OffsetDateTime>,
	/// Last update timestamp.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub last_updated: Option<OffsetDateTime>,
	/// Free-form profile attributes forwarded to the integration.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub profile: Option<BTreeMap<String, serde_json::Value>>,
	/// End-user visibility toggles.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub visibility: Option<ApplicationVisibility>,
	/// Accessibility overrides.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub accessibility: Option<ApplicationAccessibility>,
	/// Integration-specific settings.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub settings: Option<ApplicationSettings>,
}

/// Sign-on modes supported by applications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignOnMode {
	/// Credentials are replayed by the browser plugin automatically.
	AutoLogin,
	/// HTTP Basic authentication.
	Basic,
	/// Bookmark-only entry, no sign-on.
	Bookmark,
	/// Browser plugin with secure password store.
	BrowserPlugin,
	/// OpenID Connect.
	#[serde(rename = "OPENID_CONNECT")]
	OpenIdConnect,
	/// SAML 2.0.
	#[serde(rename = "SAML_2_0")]
	Saml2,
	/// Secure password store.
	SecurePasswordStore,
	/// WS-Federation.
	WsFederation,
}

/// End-user visibility toggles for an application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationVisibility {
	/// Whether the sign-on form auto-submits on the dashboard.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auto_submit_toolbar: Option<bool>,
	/// Per-surface hide flags.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hide: Option<ApplicationVisibilityHide>,
}

/// Surfaces an application icon can be hidden from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationVisibilityHide {
	/// Hide on mobile dashboards.
	#[serde(rename = "iOS", skip_serializing_if = "Option::is_none")]
	pub ios: Option<bool>,
	/// Hide on the web dashboard.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub web: Option<bool>,
}

/// Accessibility overrides for an application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationAccessibility {
	/// Custom error redirect URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error_redirect_url: Option<String>,
	/// Custom login redirect URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub login_redirect_url: Option<String>,
	/// Whether end users may self-assign the application.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub self_service: Option<bool>,
}

/// Integration-specific settings bag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationSettings {
	/// Opaque per-integration configuration, passed through unchanged.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub app: Option<BTreeMap<String, serde_json::Value>>,
	/// Admin/end-user notes.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notes: Option<ApplicationSettingsNotes>,
}

/// Notes shown to admins and end users.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationSettingsNotes {
	/// Note visible to admins only.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub admin: Option<String>,
	/// Note visible to assigned end users.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub enduser: Option<String>,
}
