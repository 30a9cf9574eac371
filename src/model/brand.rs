//! Brand and theme customization models.

// self
use crate::_prelude::*;

/// Org-level branding container owning themes and policy links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Brand {
	/// Unique identifier, assigned by the service.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Default locale applied to branded pages.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub locale: Option<String>,
	/// Whether the custom privacy policy has been accepted.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub agree_to_custom_privacy_policy: Option<bool>,
	/// URL of the custom privacy policy linked from branded pages.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub custom_privacy_policy_url: Option<String>,
}

/// A theme attached to a brand, controlling colors, images, and page variants.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
	/// Unique identifier, assigned by the service.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// URL of the uploaded logo.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub logo: Option<String>,
	/// URL of the uploaded favicon.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub favicon: Option<String>,
	/// URL of the uploaded background image.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub background_image: Option<String>,
	/// Primary brand color.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub primary_color_hex: Option<String>,
	/// Contrast color paired with the primary color.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub primary_color_contrast_hex: Option<String>,
	/// Secondary brand color.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub secondary_color_hex: Option<String>,
	/// Contrast color paired with the secondary color.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub secondary_color_contrast_hex: Option<String>,
	/// Variant applied to the sign-in page.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sign_in_page_touch_point_variant: Option<SignInPageTouchPointVariant>,
	/// Variant applied to the end-user dashboard.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub end_user_dashboard_touch_point_variant: Option<EndUserDashboardTouchPointVariant>,
	/// Variant applied to error pages.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error_page_touch_point_variant: Option<ErrorPageTouchPointVariant>,
	/// Variant applied to outgoing email templates.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email_template_touch_point_variant: Option<EmailTemplateTouchPointVariant>,
}

/// Sign-in page styling variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignInPageTouchPointVariant {
	/// Stock styling.
	Default,
	/// Fill the page background with the secondary color.
	BackgroundSecondaryColor,
	/// Fill the page background with the uploaded image.
	BackgroundImage,
}

/// End-user dashboard styling variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EndUserDashboardTouchPointVariant {
	/// Stock styling.
	Default,
	/// White logo on the brand background.
	WhiteLogoBackground,
	/// Apply the full theme.
	FullTheme,
	/// Logo on a white background.
	LogoOnFullWhiteBackground,
}

/// Error page styling variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorPageTouchPointVariant {
	/// Stock styling.
	Default,
	/// Fill the page background with the secondary color.
	BackgroundSecondaryColor,
	/// Fill the page background with the uploaded image.
	BackgroundImage,
}

/// Email template styling variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailTemplateTouchPointVariant {
	/// Stock styling.
	Default,
	/// Apply the full theme.
	FullTheme,
}

/// Response returned by image upload operations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageUploadResponse {
	/// Public URL of the stored image.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
}
