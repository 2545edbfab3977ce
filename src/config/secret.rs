//! Credential values that never reach logs.

// self
use crate::_prelude::*;

const MASK: &str = "***";

/// Consumer secret, access token, token secret, or password.
///
/// `Debug` and `Display` print a mask, so a [`Configuration`](super::Configuration) can be logged
/// whole. Signing code reads the raw value through [`Secret::expose`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(String);
impl Secret {
	/// Wraps a credential.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Raw credential, for signing only.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Whether the credential is blank.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Treats a blank credential the same as an unset one.
	pub fn configured(secret: Option<&Self>) -> Option<&Self> {
		secret.filter(|secret| !secret.is_empty())
	}

	/// Raw value of a configured credential, or [`Error::CredentialsMissing`] naming `field`.
	pub(crate) fn require<'a>(
		secret: Option<&'a Self>,
		policy: &'static str,
		field: &'static str,
	) -> Result<&'a str> {
		Self::configured(secret)
			.map(Self::expose)
			.ok_or(Error::CredentialsMissing { policy, field })
	}
}
impl From<&str> for Secret {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl From<String> for Secret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Secret({MASK})")
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(MASK)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn formatting_masks_the_value() {
		let secret = Secret::from("hunter2");

		assert_eq!(format!("{secret:?}"), "Secret(***)");
		assert_eq!(secret.to_string(), "***");
		assert_eq!(secret.expose(), "hunter2");
	}

	#[test]
	fn blank_credentials_count_as_missing() {
		let blank = Secret::default();

		assert!(Secret::configured(Some(&blank)).is_none());
		assert!(matches!(
			Secret::require(Some(&blank), "basic", "basic_password"),
			Err(Error::CredentialsMissing { policy: "basic", field: "basic_password" })
		));
		assert_eq!(
			Secret::require(Some(&Secret::from("ts")), "oauth1", "oauth_token_secret").ok(),
			Some("ts")
		);
	}
}
