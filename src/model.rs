//! Typed resource models exchanged with the management API.
//!
//! Every type here is a plain data record: instantiated empty or from deserialized JSON,
//! mutated through its public fields, passed by reference into an API call, discarded
//! after use. Business-rule validation is server-side; the client never enforces
//! cross-object invariants. Wire names are camelCase; absent optional fields stay off the
//! wire on serialization.

pub mod application;
pub mod authorization_server;
pub mod brand;
pub mod group;
pub mod identity_provider;
pub mod resource_set;
pub mod schema;
pub mod user;

pub use application::*;
pub use authorization_server::*;
pub use brand::*;
pub use group::*;
pub use identity_provider::*;
pub use resource_set::*;
pub use schema::*;
pub use user::*;

// self
use crate::_prelude::*;

/// Lifecycle status shared by activatable resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleStatus {
	/// Resource is live and serving traffic.
	Active,
	/// Resource is deactivated but retained.
	Inactive,
	/// Resource is soft-deleted.
	Deleted,
}

/// Issuer mode shared by authorization servers and identity providers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssuerMode {
	/// Issue URLs on the custom domain.
	CustomUrl,
	/// Issue URLs on the org domain.
	OrgUrl,
	/// Pick the issuer per request origin.
	Dynamic,
}
