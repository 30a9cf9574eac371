//! Client-level error types shared across the invoker, transport, and Api surfaces.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// A required path or body parameter was missing; raised before any network I/O.
	#[error("Missing the required parameter `{name}`.")]
	MissingParameter {
		/// Name of the offending parameter.
		name: &'static str,
	},
	/// Service rejected the request with a non-success status.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Response body could not be decoded into the expected model.
	#[error("Response body could not be decoded into the expected model.")]
	Decode {
		/// Structured parsing failure naming the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response that failed to decode.
		status: u16,
	},
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
}
impl Error {
	/// HTTP-equivalent status code carried by this error, when one applies.
	///
	/// Client-side validation failures report `400` without any request having been sent,
	/// matching the status the service itself would have returned.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::MissingParameter { .. } => Some(400),
			Self::Api(e) => Some(e.status),
			Self::Decode { status, .. } => Some(*status),
			Self::Config(_) | Self::Transport(_) => None,
		}
	}
}

/// Error returned by the service for a non-success response.
///
/// Status and body pass through unchanged from the wire; nothing is retried or rewritten.
#[derive(Debug, ThisError)]
#[error("Service returned {status}: {}.", .body.summary())]
pub struct ApiError {
	/// HTTP status code from the service.
	pub status: u16,
	/// Parsed error body, or the raw text folded into the summary when parsing fails.
	pub body: Box<ApiErrorBody>,
	/// Rate-limit reset hint from response headers. Surfaced for callers, never acted on.
	pub retry_after: Option<Duration>,
}

/// Structured error payload produced by the service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiErrorBody {
	/// Service-defined error code, e.g. `E0000007`.
	pub error_code: Option<String>,
	/// Human-readable summary of the failure.
	pub error_summary: Option<String>,
	/// Link identifier pointing at service documentation.
	pub error_link: Option<String>,
	/// Unique identifier of this error occurrence.
	pub error_id: Option<String>,
	/// Field-level causes attached by the service.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub error_causes: Vec<ApiErrorCause>,
}
impl ApiErrorBody {
	/// Parses a raw response body, falling back to a text summary for non-JSON payloads.
	pub fn from_raw(raw: &[u8]) -> Self {
		if let Ok(body) = serde_json::from_slice::<Self>(raw)
			&& body != Self::default()
		{
			return body;
		}

		let text = String::from_utf8_lossy(raw).trim().to_owned();

		Self { error_summary: (!text.is_empty()).then_some(text), ..Default::default() }
	}

	/// Best-effort one-line summary for display purposes.
	pub fn summary(&self) -> &str {
		self.error_summary.as_deref().unwrap_or("no error body")
	}
}

/// Single cause entry inside [`ApiErrorBody`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiErrorCause {
	/// Human-readable summary of this cause.
	pub error_summary: Option<String>,
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Org base URL cannot be parsed.
	#[error("Org URL is invalid.")]
	InvalidOrgUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Org base URL must use HTTPS.
	#[error("Org URL must use HTTPS: {url}.")]
	InsecureOrgUrl {
		/// Org URL that failed validation.
		url: String,
	},
	/// Org base URL still carries a copy-paste placeholder.
	#[error("Org URL contains an unresolved placeholder: {url}.")]
	PlaceholderOrgUrl {
		/// Org URL that failed validation.
		url: String,
	},
	/// Org base URL must point at the org root, not the API path.
	#[error("Org URL must not include the `/api/v1` suffix: {url}.")]
	OrgUrlWithApiSuffix {
		/// Org URL that failed validation.
		url: String,
	},
	/// No authorization scheme was configured.
	#[error("An API token or bearer token is required.")]
	MissingAuthorization,
	/// Configured token was empty or whitespace.
	#[error("Authorization token cannot be empty.")]
	EmptyToken,
	/// Request body could not be serialized to JSON.
	#[error("Request body could not be serialized.")]
	BodySerialize(#[from] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the service.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the service.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
