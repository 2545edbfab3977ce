//! Client-level error types shared across configuration, signing, dispatch, and parsing.

// self
use crate::{_prelude::*, resource::ResourceKind};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The selected authorization policy lacks a credential it needs to sign.
	#[error("The {policy} policy requires `{field}` to be configured.")]
	CredentialsMissing {
		/// Policy label (`basic`, `oauth1`).
		policy: &'static str,
		/// Missing configuration attribute.
		field: &'static str,
	},
	/// Trello rejected the access token as expired.
	#[error("Access token has expired: {body}.")]
	ExpiredToken {
		/// Raw response body.
		body: String,
	},
	/// Trello answered with a status outside the accepted set.
	#[error("Request failed with HTTP {status}: {body}.")]
	RequestFailed {
		/// HTTP status code.
		status: u16,
		/// Raw response body.
		body: String,
	},
	/// A resource tag did not match any known resource kind.
	#[error("Unknown resource tag `{tag}`.")]
	NameResolution {
		/// Tag supplied by the caller.
		tag: String,
	},
	/// Response body did not match the expected record shape.
	#[error("Failed to parse {kind} response.")]
	Parse {
		/// Record kind being parsed.
		kind: ResourceKind,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Relationship helper called on a record without a client back-reference.
	#[error("The {kind} record is not attached to a client.")]
	Detached {
		/// Record kind.
		kind: ResourceKind,
	},
	/// HMAC rejected the signing key.
	#[error("OAuth signing key was rejected.")]
	InvalidSigningKey,
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Attribute name is not part of the recognized configuration set.
	#[error("Unknown configuration attribute `{key}`.")]
	UnknownAttribute {
		/// Attribute name supplied by the caller.
		key: String,
	},
	/// API base cannot be parsed as an absolute URL.
	#[error("API base `{value}` is not a valid URL.")]
	InvalidApiBase {
		/// Rejected value.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Request path produced an unparsable URL.
	#[error("Request path `{path}` does not form a valid URL.")]
	InvalidPath {
		/// Path supplied by the caller.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// No transport was supplied and no default transport is compiled in.
	#[error("No transport configured; enable the `reqwest` feature or supply one.")]
	MissingTransport,
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Transport-level failures.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Trello API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for TransportError {
	fn from(e: reqwest::Error) -> Self {
		Self::network(e)
	}
}
