//! Shared request invoker behind every Api struct.
//!
//! Every operation on this surface follows the same mechanical shape: validate required
//! identifiers, assemble path segments and query pairs into an [`OpRequest`], merge
//! headers, then hand the request to [`ApiClient::invoke`] (or its unit/paged variants).
//! The invoker owns URL assembly with percent-escaping, Accept/Content-Type selection,
//! JSON decoding, and error classification; Api structs own nothing but the shape of
//! their operations.

// crates.io
use serde::de::DeserializeOwned;
use time::format_description::well_known::Rfc2822;
// self
use crate::{
	_prelude::*,
	config::OrgSettings,
	error::{ApiError, ApiErrorBody, ConfigError},
	obs::OpSpan,
	pagination::{self, PagedList},
	transport::{HttpTransport, Method, RequestBody, TransportRequest, TransportResponse},
};
#[cfg(feature = "reqwest")] use crate::transport::ReqwestTransport;

/// Accept candidates offered for every operation. JSON-capable entries win.
const ACCEPT_CANDIDATES: &[&str] = &["application/json"];
/// Content-Type candidates offered for request bodies. JSON-capable entries win.
const CONTENT_TYPE_CANDIDATES: &[&str] = &["application/json"];
/// Rate-limit reset header, expressed in epoch seconds.
const X_RATE_LIMIT_RESET: &str = "x-rate-limit-reset";

/// Rejects a required identifier that is empty or whitespace-only.
///
/// Runs before any request assembly, so a failing parameter never reaches the network.
pub(crate) fn require(name: &'static str, value: &str) -> Result<()> {
	if value.trim().is_empty() { Err(Error::MissingParameter { name }) } else { Ok(()) }
}

/// One operation's worth of request state, accumulated by Api methods.
#[derive(Clone, Debug)]
pub struct OpRequest {
	method: Method,
	resource: &'static str,
	operation: &'static str,
	segments: Vec<String>,
	query: Vec<(String, String)>,
	headers: Vec<(String, String)>,
	body: RequestBody,
}
impl OpRequest {
	/// Starts a request for the given method, tagged with resource + operation for spans.
	pub fn new(method: Method, resource: &'static str, operation: &'static str) -> Self {
		Self {
			method,
			resource,
			operation,
			segments: Vec::new(),
			query: Vec::new(),
			headers: Vec::new(),
			body: RequestBody::Empty,
		}
	}

	/// Appends one path segment. Escaping happens during URL assembly, so raw identifiers
	/// are safe to pass here.
	pub fn segment(mut self, value: impl Into<String>) -> Self {
		self.segments.push(value.into());

		self
	}

	/// Appends several fixed path segments.
	pub fn segments<I>(mut self, values: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.segments.extend(values.into_iter().map(Into::into));

		self
	}

	/// Appends a query pair.
	pub fn query(mut self, name: &str, value: impl ToString) -> Self {
		self.query.push((name.to_owned(), value.to_string()));

		self
	}

	/// Appends a query pair when the value is present; `None` never reaches the query
	/// string.
	pub fn query_opt(self, name: &str, value: Option<impl ToString>) -> Self {
		match value {
			Some(value) => self.query(name, value),
			None => self,
		}
	}

	/// Attaches a per-request header. Overrides computed and default headers by name.
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));

		self
	}

	/// Serializes `body` as the JSON payload of this request.
	pub fn json<T>(mut self, body: &T) -> Result<Self>
	where
		T: Serialize,
	{
		self.body = RequestBody::Json(serde_json::to_string(body).map_err(ConfigError::from)?);

		Ok(self)
	}

	/// Attaches a multipart upload as the payload of this request.
	pub fn multipart(mut self, part: crate::transport::FilePart) -> Self {
		self.body = RequestBody::Multipart(part);

		self
	}
}

/// Stateless handle to the management API, shared by every Api struct.
///
/// Cloning is cheap; clones share the same transport and settings. The client holds no
/// mutable state, so instances can cross threads and tasks freely.
#[derive(Clone)]
pub struct ApiClient {
	transport: Arc<dyn HttpTransport>,
	settings: Arc<OrgSettings>,
}
impl ApiClient {
	/// Creates a client backed by the default reqwest transport, honoring the configured
	/// timeout.
	#[cfg(feature = "reqwest")]
	pub fn new(settings: OrgSettings) -> Result<Self> {
		let mut builder = ReqwestClient::builder();

		if let Some(timeout) = settings.timeout {
			builder = builder.timeout(timeout);
		}

		let client = builder.build().map_err(ConfigError::from)?;

		Ok(Self::with_transport(settings, ReqwestTransport::with_client(client)))
	}

	/// Creates a client that reuses a caller-provided transport.
	pub fn with_transport(settings: OrgSettings, transport: impl HttpTransport) -> Self {
		Self { transport: Arc::new(transport), settings: Arc::new(settings) }
	}

	/// Org settings backing this client.
	pub fn settings(&self) -> &OrgSettings {
		&self.settings
	}

	/// Executes a request and decodes the JSON response into `T`.
	pub(crate) async fn invoke<T>(&self, request: OpRequest) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let response = self.dispatch(request).await?;

		decode(&response)
	}

	/// Executes a request whose successful response carries no payload of interest.
	pub(crate) async fn invoke_unit(&self, request: OpRequest) -> Result<()> {
		self.dispatch(request).await.map(|_| ())
	}

	/// Executes a list request, decoding the items and capturing the next-page cursor
	/// from the `Link` response header.
	pub(crate) async fn invoke_paged<T>(&self, request: OpRequest) -> Result<PagedList<T>>
	where
		T: DeserializeOwned,
	{
		let response = self.dispatch(request).await?;
		let items = decode(&response)?;

		Ok(PagedList::new(items, pagination::next_link(&response)))
	}

	async fn dispatch(&self, request: OpRequest) -> Result<TransportResponse> {
		let span = OpSpan::new(request.resource, request.operation);
		let url = self.build_url(&request);
		let headers = self.merged_headers(&request);
		let transport_request =
			TransportRequest { method: request.method, url, headers, body: request.body };
		let response = span.instrument(self.transport.execute(transport_request)).await?;

		if response.is_success() {
			Ok(response)
		} else {
			Err(Error::Api(classify(&response)))
		}
	}

	fn build_url(&self, request: &OpRequest) -> Url {
		let mut url = self.settings.base_url.clone();

		if let Ok(mut segments) = url.path_segments_mut() {
			segments.pop_if_empty().extend(&request.segments);
		}
		for (name, value) in &request.query {
			url.query_pairs_mut().append_pair(name, value);
		}

		url
	}

	fn merged_headers(&self, request: &OpRequest) -> Vec<(String, String)> {
		let mut merged = Vec::new();

		for (name, value) in &self.settings.default_headers {
			upsert(&mut merged, name, value.clone());
		}
		if let Some(accept) = select_media_type(ACCEPT_CANDIDATES) {
			upsert(&mut merged, "accept", accept.to_owned());
		}
		// Multipart boundaries belong to the transport, so only JSON bodies pin a type here.
		if matches!(request.body, RequestBody::Json(_))
			&& let Some(content_type) = select_media_type(CONTENT_TYPE_CANDIDATES)
		{
			upsert(&mut merged, "content-type", content_type.to_owned());
		}

		upsert(&mut merged, "authorization", self.settings.auth.header_value());
		upsert(&mut merged, "user-agent", self.settings.user_agent.clone());

		for (name, value) in &request.headers {
			upsert(&mut merged, name, value.clone());
		}

		merged
	}
}
impl Debug for ApiClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("base_url", &self.settings.base_url.as_str())
			.field("user_agent", &self.settings.user_agent)
			.finish()
	}
}

fn upsert(headers: &mut Vec<(String, String)>, name: &str, value: String) {
	match headers.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(name)) {
		Some((_, existing)) => *existing = value,
		None => headers.push((name.to_owned(), value)),
	}
}

/// Selects the first JSON-capable candidate, falling back to the head of the list.
fn select_media_type(candidates: &[&'static str]) -> Option<&'static str> {
	candidates
		.iter()
		.copied()
		.find(|candidate| candidate.contains("json"))
		.or_else(|| candidates.first().copied())
}

fn decode<T>(response: &TransportResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::Decode { source, status: response.status })
}

fn classify(response: &TransportResponse) -> ApiError {
	ApiError {
		status: response.status,
		body: Box::new(ApiErrorBody::from_raw(&response.body)),
		retry_after: rate_limit_reset(response),
	}
}

fn rate_limit_reset(response: &TransportResponse) -> Option<Duration> {
	if let Some(raw) = response.header(X_RATE_LIMIT_RESET)
		&& let Ok(epoch) = raw.trim().parse::<i64>()
		&& let Ok(moment) = OffsetDateTime::from_unix_timestamp(epoch)
	{
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	let raw = response.header("retry-after")?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(secs as i64));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{error::TransportError, transport::TransportFuture};

	struct NoopTransport;
	impl HttpTransport for NoopTransport {
		fn execute(&self, _: TransportRequest) -> TransportFuture<'_> {
			Box::pin(async { Err(TransportError::Network { source: "unused".into() }) })
		}
	}

	fn test_client() -> ApiClient {
		let settings = OrgSettings::builder("https://org.example.com")
			.api_token("token")
			.default_header("x-default", "base")
			.build()
			.expect("Test settings should build successfully.");

		ApiClient::with_transport(settings, NoopTransport)
	}

	#[test]
	fn build_url_escapes_path_segments_and_skips_none_query() {
		let client = test_client();
		let request = OpRequest::new(Method::Get, "application", "get_application")
			.segments(["api", "v1", "apps"])
			.segment("app id/../etc")
			.query_opt("expand", Some("user"))
			.query_opt("limit", None::<i64>);
		let url = client.build_url(&request);

		assert_eq!(
			url.as_str(),
			"https://org.example.com/api/v1/apps/app%20id%2F..%2Fetc?expand=user",
		);
	}

	#[test]
	fn merged_headers_let_request_values_override_computed_ones() {
		let client = test_client();
		let request = OpRequest::new(Method::Post, "application", "create_application")
			.json(&serde_json::json!({"label": "x"}))
			.expect("JSON body should serialize successfully.")
			.header("Accept", "application/xml")
			.header("x-default", "override");
		let headers = client.merged_headers(&request);
		let get = |name: &str| {
			headers
				.iter()
				.find(|(n, _)| n.eq_ignore_ascii_case(name))
				.map(|(_, value)| value.as_str())
		};

		assert_eq!(get("accept"), Some("application/xml"));
		assert_eq!(get("content-type"), Some("application/json"));
		assert_eq!(get("authorization"), Some("SSWS token"));
		assert_eq!(get("x-default"), Some("override"));
	}

	#[test]
	fn require_rejects_blank_identifiers_only() {
		assert!(require("app_id", "0oa1gjh63g214q0Hq0g4").is_ok());
		assert!(matches!(
			require("app_id", " \t"),
			Err(Error::MissingParameter { name: "app_id" })
		));
	}

	#[test]
	fn classify_surfaces_status_body_and_reset_hint() {
		let response = TransportResponse {
			status: 429,
			headers: vec![("retry-after".into(), "30".into())],
			body: br#"{"errorCode":"E0000047","errorSummary":"API call exceeded rate limit"}"#
				.to_vec(),
		};
		let err = classify(&response);

		assert_eq!(err.status, 429);
		assert_eq!(err.body.error_code.as_deref(), Some("E0000047"));
		assert_eq!(err.retry_after, Some(Duration::seconds(30)));
	}
}
