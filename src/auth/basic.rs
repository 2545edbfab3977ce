//! HTTP Basic authentication.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::{
	_prelude::*,
	auth::RequestSigner,
	config::{Configuration, Secret},
	http::Request,
};

const POLICY: &str = "basic";

/// Attaches `Authorization: Basic ...` derived from a username/password pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicAuthPolicy {
	username: Option<String>,
	password: Option<Secret>,
}
impl BasicAuthPolicy {
	/// Creates a policy for the provided credentials.
	pub fn new(username: impl Into<String>, password: impl Into<Secret>) -> Self {
		Self { username: Some(username.into()), password: Some(password.into()) }
	}

	/// Copies the Basic credential subset out of a configuration.
	pub fn from_configuration(configuration: &Configuration) -> Self {
		Self {
			username: configuration.basic_username.clone(),
			password: configuration.basic_password.clone(),
		}
	}

	fn header_value(&self) -> Result<String> {
		let username = self
			.username
			.as_deref()
			.filter(|value| !value.is_empty())
			.ok_or(Error::CredentialsMissing { policy: POLICY, field: "basic_username" })?;
		let password = Secret::require(self.password.as_ref(), POLICY, "basic_password")?;

		Ok(format!("Basic {}", STANDARD.encode(format!("{username}:{password}"))))
	}
}
impl RequestSigner for BasicAuthPolicy {
	fn sign(&self, request: Request) -> Result<Request> {
		Ok(request.with_header("Authorization", self.header_value()?))
	}
}
