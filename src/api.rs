//! Api structs wrapping the management REST surface, one per resource family.
//!
//! Each struct holds a clone of the shared [`ApiClient`](crate::client::ApiClient) and
//! nothing else; all of them follow the same operation shape. Validate required
//! identifiers, assemble the path, attach query parameters, delegate to the invoker,
//! return the typed result or propagate the error unchanged.

pub mod application;
pub mod authorization_server;
pub mod customization;
pub mod group;
pub mod identity_provider;
pub mod resource_set;
pub mod schema;

pub use application::*;
pub use authorization_server::*;
pub use customization::*;
pub use group::*;
pub use identity_provider::*;
pub use resource_set::*;
pub use schema::*;
