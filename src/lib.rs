//! Typed async client for cloud identity-management REST APIs - applications, groups,
//! authorization servers, brands and themes, identity providers, resource sets, and schemas
//! behind one stateless invoker.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod idp;
pub mod model;
pub mod obs;
pub mod pagination;
pub mod transport;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		client::ApiClient,
		config::OrgSettings,
		transport::ReqwestTransport,
	};

	/// API token attached to every request issued by [`test_api_client`].
	pub const TEST_API_TOKEN: &str = "00test-api-token";

	/// Builds a reqwest transport that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_transport() -> ReqwestTransport {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestTransport::with_client(client)
	}

	/// Constructs an [`ApiClient`] pointed at a mock server base URL, authenticated with
	/// [`TEST_API_TOKEN`] and backed by the insecure test transport.
	pub fn test_api_client(base_url: &str) -> ApiClient {
		let settings = OrgSettings::builder(base_url)
			.api_token(TEST_API_TOKEN)
			.build()
			.expect("Org settings should build successfully for tests.");

		ApiClient::with_transport(settings, test_transport())
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, idm_admin as _, tokio as _};
