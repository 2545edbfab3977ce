//! Connection and credential configuration for a [`Client`](crate::client::Client).
//!
//! [`Configuration`] is a plain data holder over a closed set of attributes
//! ([`ConfigAttribute`]). The active authorization mode is derived from which
//! credential fields are populated; it is never stored separately.

pub mod secret;

pub use secret::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// Default Trello API origin.
pub const DEFAULT_API_BASE: &str = "https://api.trello.com";
/// API version segment prefixed to every request path.
pub const API_VERSION: &str = "1";

/// Recognized configuration attribute names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigAttribute {
	/// OAuth consumer (application) key.
	ConsumerKey,
	/// OAuth consumer (application) secret.
	ConsumerSecret,
	/// OAuth access token.
	OAuthToken,
	/// OAuth access token secret.
	OAuthTokenSecret,
	/// Basic-auth username.
	BasicUsername,
	/// Basic-auth password.
	BasicPassword,
	/// OAuth callback URL used while no access token is configured.
	Callback,
	/// URL the user returns to after authorizing the application.
	ReturnUrl,
	/// API origin, `https://api.trello.com` unless overridden.
	ApiBase,
}
impl ConfigAttribute {
	/// Every recognized attribute, in declaration order.
	pub const ALL: [Self; 9] = [
		Self::ConsumerKey,
		Self::ConsumerSecret,
		Self::OAuthToken,
		Self::OAuthTokenSecret,
		Self::BasicUsername,
		Self::BasicPassword,
		Self::Callback,
		Self::ReturnUrl,
		Self::ApiBase,
	];

	/// Returns the attribute's configuration key.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::ConsumerKey => "consumer_key",
			Self::ConsumerSecret => "consumer_secret",
			Self::OAuthToken => "oauth_token",
			Self::OAuthTokenSecret => "oauth_token_secret",
			Self::BasicUsername => "basic_username",
			Self::BasicPassword => "basic_password",
			Self::Callback => "callback",
			Self::ReturnUrl => "return_url",
			Self::ApiBase => "api_base",
		}
	}
}
impl Display for ConfigAttribute {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ConfigAttribute {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|attr| attr.as_str() == s)
			.ok_or_else(|| ConfigError::UnknownAttribute { key: s.to_owned() })
	}
}

/// Authorization mode derived from the populated credentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthMode {
	/// No credentials; requests go out unsigned.
	None,
	/// HTTP Basic with username/password.
	Basic,
	/// OAuth 1.0a HMAC-SHA1 signing.
	OAuth1,
}
impl AuthMode {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Basic => "basic",
			Self::OAuth1 => "oauth1",
		}
	}
}

/// Credentials and connection attributes read on every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
	/// OAuth consumer key.
	pub consumer_key: Option<String>,
	/// OAuth consumer secret.
	pub consumer_secret: Option<Secret>,
	/// OAuth access token.
	pub oauth_token: Option<Secret>,
	/// OAuth access token secret.
	pub oauth_token_secret: Option<Secret>,
	/// Basic-auth username.
	pub basic_username: Option<String>,
	/// Basic-auth password.
	pub basic_password: Option<Secret>,
	/// OAuth callback URL.
	pub callback: Option<String>,
	/// Post-authorization return URL.
	pub return_url: Option<String>,
	/// API origin every request path is resolved against.
	pub api_base: Url,
}
impl Configuration {
	/// Creates a configuration populated from `(key, value)` pairs.
	pub fn from_attributes<I, K, V>(attributes: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let mut configuration = Self::default();

		configuration.assign(attributes)?;

		Ok(configuration)
	}

	/// Assigns a single attribute by name.
	pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), ConfigError> {
		self.assign([(key, value)])
	}

	/// Assigns many attributes at once.
	///
	/// Every key (and the API base, when present) is validated before anything is written, so a
	/// failed call leaves the configuration untouched.
	pub fn assign<I, K, V>(&mut self, attributes: I) -> Result<(), ConfigError>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let mut staged = Vec::new();

		for (key, value) in attributes {
			let attribute = key.as_ref().parse::<ConfigAttribute>()?;
			let value = value.into();

			if attribute == ConfigAttribute::ApiBase {
				parse_api_base(&value)?;
			}

			staged.push((attribute, value));
		}
		for (attribute, value) in staged {
			self.apply(attribute, value)?;
		}

		Ok(())
	}

	/// Returns the current value of an attribute.
	///
	/// Secret attributes are returned in clear text; keep the result out of logs.
	pub fn get(&self, attribute: ConfigAttribute) -> Option<&str> {
		match attribute {
			ConfigAttribute::ConsumerKey => self.consumer_key.as_deref(),
			ConfigAttribute::ConsumerSecret => self.consumer_secret.as_ref().map(Secret::expose),
			ConfigAttribute::OAuthToken => self.oauth_token.as_ref().map(Secret::expose),
			ConfigAttribute::OAuthTokenSecret =>
				self.oauth_token_secret.as_ref().map(Secret::expose),
			ConfigAttribute::BasicUsername => self.basic_username.as_deref(),
			ConfigAttribute::BasicPassword => self.basic_password.as_ref().map(Secret::expose),
			ConfigAttribute::Callback => self.callback.as_deref(),
			ConfigAttribute::ReturnUrl => self.return_url.as_deref(),
			ConfigAttribute::ApiBase => Some(self.api_base.as_str()),
		}
	}

	/// Returns `true` when the attribute holds a non-empty value.
	pub fn is_populated(&self, attribute: ConfigAttribute) -> bool {
		self.get(attribute).is_some_and(|value| !value.is_empty())
	}

	/// OAuth is active when both consumer key and consumer secret are populated.
	pub fn uses_oauth(&self) -> bool {
		self.is_populated(ConfigAttribute::ConsumerKey)
			&& self.is_populated(ConfigAttribute::ConsumerSecret)
	}

	/// Basic auth is active when username and password are populated and OAuth is not.
	pub fn uses_basic_auth(&self) -> bool {
		!self.uses_oauth()
			&& self.is_populated(ConfigAttribute::BasicUsername)
			&& self.is_populated(ConfigAttribute::BasicPassword)
	}

	/// Derives the active authorization mode; OAuth wins over Basic.
	pub fn auth_mode(&self) -> AuthMode {
		if self.uses_oauth() {
			AuthMode::OAuth1
		} else if self.uses_basic_auth() {
			AuthMode::Basic
		} else {
			AuthMode::None
		}
	}

	/// Resolves `path` against the API base and version segment.
	///
	/// Leading slashes on `path` are ignored, so `"/boards/1"` and `"boards/1"` resolve to the
	/// same URL.
	pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		let base = self.api_base.as_str().trim_end_matches('/');
		let raw = format!("{base}/{API_VERSION}/{}", path.trim_start_matches('/'));

		Url::parse(&raw)
			.map_err(|source| ConfigError::InvalidPath { path: path.to_owned(), source })
	}

	fn apply(&mut self, attribute: ConfigAttribute, value: String) -> Result<(), ConfigError> {
		match attribute {
			ConfigAttribute::ConsumerKey => self.consumer_key = Some(value),
			ConfigAttribute::ConsumerSecret => self.consumer_secret = Some(value.into()),
			ConfigAttribute::OAuthToken => self.oauth_token = Some(value.into()),
			ConfigAttribute::OAuthTokenSecret => self.oauth_token_secret = Some(value.into()),
			ConfigAttribute::BasicUsername => self.basic_username = Some(value),
			ConfigAttribute::BasicPassword => self.basic_password = Some(value.into()),
			ConfigAttribute::Callback => self.callback = Some(value),
			ConfigAttribute::ReturnUrl => self.return_url = Some(value),
			ConfigAttribute::ApiBase => self.api_base = parse_api_base(&value)?,
		}

		Ok(())
	}
}
impl Default for Configuration {
	fn default() -> Self {
		Self {
			consumer_key: None,
			consumer_secret: None,
			oauth_token: None,
			oauth_token_secret: None,
			basic_username: None,
			basic_password: None,
			callback: None,
			return_url: None,
			api_base: Url::parse(DEFAULT_API_BASE).expect("Default API base must be a valid URL."),
		}
	}
}

fn parse_api_base(value: &str) -> Result<Url, ConfigError> {
	Url::parse(value)
		.map_err(|source| ConfigError::InvalidApiBase { value: value.to_owned(), source })
}
