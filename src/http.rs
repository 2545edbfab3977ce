//! Transport primitives for Trello API calls.
//!
//! The module exposes the immutable [`Request`] value handed to authorization policies,
//! the [`Response`] shape returned by transports, and the [`Transport`] trait that forms the
//! client's only dependency on an HTTP stack. [`ReqwestTransport`] is the default blocking
//! implementation.

// self
use crate::{_prelude::*, error::TransportError};
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Flat key/value mapping used for query strings and form bodies.
pub type Params = BTreeMap<String, String>;

/// HTTP verbs issued by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
	/// `DELETE`
	Delete,
}
impl Verb {
	/// Returns the upper-case method name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Put => "PUT",
			Self::Delete => "DELETE",
		}
	}

	/// Returns `true` for verbs that carry a request body.
	pub const fn has_body(self) -> bool {
		matches!(self, Self::Post | Self::Put)
	}
}
impl Display for Verb {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outbound request description.
///
/// Fields are private; authorization policies derive a new value through the consuming
/// builders instead of editing a request in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
	verb: Verb,
	url: Url,
	headers: BTreeMap<String, String>,
	body: Option<Params>,
}
impl Request {
	/// Creates a request without headers.
	pub fn new(verb: Verb, url: Url, body: Option<Params>) -> Self {
		Self { verb, url, headers: BTreeMap::new(), body }
	}

	/// HTTP verb.
	pub fn verb(&self) -> Verb {
		self.verb
	}

	/// Fully resolved URL, including the query string.
	pub fn url(&self) -> &Url {
		&self.url
	}

	/// Request headers.
	pub fn headers(&self) -> &BTreeMap<String, String> {
		&self.headers
	}

	/// Returns a header value by name (case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	/// Form body, if the verb carries one.
	pub fn body(&self) -> Option<&Params> {
		self.body.as_ref()
	}

	/// Returns a copy of the request with an extra (or replaced) header.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(name.into(), value.into());

		self
	}
}

/// Status and body returned by a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
	/// HTTP status code.
	pub code: u16,
	/// Raw response body.
	pub body: String,
}
impl Response {
	/// Creates a response value.
	pub fn new(code: u16, body: impl Into<String>) -> Self {
		Self { code, body: body.into() }
	}
}

/// Abstraction over blocking HTTP transports.
///
/// Implementations execute an already-authorized [`Request`] and surface the status code and
/// body. Returning `Ok(None)` signals that no response object is available; the client treats
/// that as an empty successful body. Timeouts, TLS, and connection reuse are the
/// implementation's concern.
pub trait Transport
where
	Self: Send + Sync,
{
	/// Executes `request` against the network.
	fn execute(&self, request: &Request) -> Result<Option<Response>, TransportError>;
}

/// Thin wrapper around the blocking reqwest client.
///
/// Bodies are sent form-encoded so the parameters on the wire are exactly the ones an OAuth 1.0a
/// signature covers.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub reqwest::blocking::Client);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Builds a transport with reqwest's default settings.
	pub fn new() -> Result<Self, ConfigError> {
		let client =
			reqwest::blocking::Client::builder().build().map_err(ConfigError::http_client_build)?;

		Ok(Self(client))
	}

	/// Wraps an existing blocking reqwest client.
	pub fn with_client(client: reqwest::blocking::Client) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<reqwest::blocking::Client> for ReqwestTransport {
	fn as_ref(&self) -> &reqwest::blocking::Client {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Transport for ReqwestTransport {
	fn execute(&self, request: &Request) -> Result<Option<Response>, TransportError> {
		let method = match request.verb() {
			Verb::Get => reqwest::Method::GET,
			Verb::Post => reqwest::Method::POST,
			Verb::Put => reqwest::Method::PUT,
			Verb::Delete => reqwest::Method::DELETE,
		};
		let mut builder = self.0.request(method, request.url().clone());

		for (name, value) in request.headers() {
			builder = builder.header(name.as_str(), value.as_str());
		}
		if let Some(body) = request.body() {
			builder = builder.form(body);
		}

		let response = builder.send()?;
		let code = response.status().as_u16();
		let body = response.text()?;

		Ok(Some(Response { code, body }))
	}
}
