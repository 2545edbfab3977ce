//! Authorization policies that attach credentials to outbound requests.
//!
//! [`AuthPolicy`] is resolved once from a [`Configuration`] snapshot and holds exactly the
//! credential subset its variant needs. Missing credentials are reported when a request is
//! signed, not when the policy is built.

pub mod basic;
pub mod oauth1;

pub use basic::*;
pub use oauth1::*;

// self
use crate::{
	_prelude::*,
	config::{AuthMode, Configuration},
	http::Request,
};

/// Describes how to attach credentials to an outbound [`Request`].
pub trait RequestSigner
where
	Self: Send + Sync,
{
	/// Consumes the request and returns an equivalent one carrying authorization material.
	fn sign(&self, request: Request) -> Result<Request>;
}

/// Authorization strategy selected from the configured credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthPolicy {
	/// Requests are sent unchanged.
	None,
	/// HTTP Basic authentication.
	Basic(BasicAuthPolicy),
	/// OAuth 1.0a HMAC-SHA1 signing.
	OAuth1(OAuth1Policy),
}
impl AuthPolicy {
	/// Resolves the policy for the configuration's active [`AuthMode`].
	pub fn from_configuration(configuration: &Configuration) -> Self {
		match configuration.auth_mode() {
			AuthMode::OAuth1 => Self::OAuth1(OAuth1Policy::from_configuration(configuration)),
			AuthMode::Basic => Self::Basic(BasicAuthPolicy::from_configuration(configuration)),
			AuthMode::None => Self::None,
		}
	}

	/// Returns the mode this policy implements.
	pub fn mode(&self) -> AuthMode {
		match self {
			Self::None => AuthMode::None,
			Self::Basic(_) => AuthMode::Basic,
			Self::OAuth1(_) => AuthMode::OAuth1,
		}
	}

	/// Returns the request with authorization material attached.
	pub fn authorize(&self, request: Request) -> Result<Request> {
		match self {
			Self::None => Ok(request),
			Self::Basic(policy) => policy.sign(request),
			Self::OAuth1(policy) => policy.sign(request),
		}
	}
}
