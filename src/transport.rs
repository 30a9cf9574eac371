//! Transport primitives behind the shared invoker.
//!
//! The module exposes [`HttpTransport`] alongside transport-neutral request and response
//! types so downstream crates can plug custom HTTP stacks under the invoker without
//! pulling in reqwest. The default [`ReqwestTransport`] lives behind the `reqwest`
//! feature and is enabled by default.

// std
use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};

/// HTTP method subset used by the management surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
	/// `GET`.
	Get,
	/// `POST`.
	Post,
	/// `PUT`.
	Put,
	/// `PATCH`.
	Patch,
	/// `DELETE`.
	Delete,
}
impl Method {
	/// Wire name of the method.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Put => "PUT",
			Self::Patch => "PATCH",
			Self::Delete => "DELETE",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Body payload attached to an outbound request.
#[derive(Clone, Debug, Default)]
pub enum RequestBody {
	/// No body.
	#[default]
	Empty,
	/// UTF-8 JSON payload, already serialized by the invoker.
	Json(String),
	/// Multipart form upload carrying a single binary part.
	Multipart(FilePart),
}

/// Binary part of a multipart upload (theme logos, favicons, background images).
#[derive(Clone, Debug)]
pub struct FilePart {
	/// Form field name, `file` for every upload operation on this surface.
	pub part_name: String,
	/// File name reported to the service.
	pub file_name: String,
	/// MIME type of the payload.
	pub content_type: String,
	/// Raw file bytes.
	pub bytes: Vec<u8>,
}
impl FilePart {
	/// Creates a part under the conventional `file` field name.
	pub fn file(
		file_name: impl Into<String>,
		content_type: impl Into<String>,
		bytes: impl Into<Vec<u8>>,
	) -> Self {
		Self {
			part_name: "file".into(),
			file_name: file_name.into(),
			content_type: content_type.into(),
			bytes: bytes.into(),
		}
	}
}

/// Fully assembled request handed to [`HttpTransport`] implementations.
///
/// Headers arrive merged and ordered; transports must forward them as-is and never inject
/// their own `Authorization` or `Accept` values.
#[derive(Clone, Debug)]
pub struct TransportRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute request URL with the query string already attached.
	pub url: Url,
	/// Merged header list.
	pub headers: Vec<(String, String)>,
	/// Body payload.
	pub body: RequestBody,
}

/// Response surfaced back to the invoker.
#[derive(Clone, Debug)]
pub struct TransportResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers with lowercased names; duplicates preserved in order.
	pub headers: Vec<(String, String)>,
	/// Raw body bytes.
	pub body: Vec<u8>,
}
impl TransportResponse {
	/// Whether the status code is in the 2xx range.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// First header value matching `name`, case-insensitively.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(n, _)| n.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

/// Boxed future type returned by [`HttpTransport::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + 'a>>;

/// Abstraction over HTTP stacks capable of executing management API calls.
///
/// The trait is the invoker's only dependency on an HTTP implementation. Implementations
/// must be `Send + Sync + 'static` so one transport can back every Api struct cloned off a
/// client, and the returned futures must be `Send` so calls can hop executors freely.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Executes a single request and returns the raw response.
	///
	/// Implementations report only transport-layer failures here; non-2xx statuses are a
	/// successful execution and are classified by the invoker.
	fn execute(&self, request: TransportRequest) -> TransportFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
/// Configure timeouts and TLS on the inner client; the wrapper adds nothing on top.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	fn execute(&self, request: TransportRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let method = match request.method {
				Method::Get => reqwest::Method::GET,
				Method::Post => reqwest::Method::POST,
				Method::Put => reqwest::Method::PUT,
				Method::Patch => reqwest::Method::PATCH,
				Method::Delete => reqwest::Method::DELETE,
			};
			let mut builder = client.request(method, request.url);

			for (name, value) in &request.headers {
				builder = builder.header(name.as_str(), value.as_str());
			}

			builder = match request.body {
				RequestBody::Empty => builder,
				RequestBody::Json(json) => builder.body(json),
				RequestBody::Multipart(part) => {
					let form_part = reqwest::multipart::Part::bytes(part.bytes)
						.file_name(part.file_name)
						.mime_str(&part.content_type)
						.map_err(TransportError::network)?;

					builder.multipart(reqwest::multipart::Form::new().part(part.part_name, form_part))
				},
			};

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let headers = response
				.headers()
				.iter()
				.filter_map(|(name, value)| {
					value.to_str().ok().map(|value| (name.as_str().to_owned(), value.to_owned()))
				})
				.collect();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(TransportResponse { status, headers, body })
		})
	}
}
