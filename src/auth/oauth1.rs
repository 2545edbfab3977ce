//! OAuth 1.0a request signing (RFC 5849, HMAC-SHA1).
//!
//! The signature covers the verb, the base URL, every query pair, every form body field, and
//! the protocol parameters. Each call draws a fresh nonce and timestamp; nothing is persisted
//! between calls.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::{Rng, distr::Alphanumeric};
use sha1::Sha1;
// self
use crate::{
	_prelude::*,
	auth::RequestSigner,
	config::{Configuration, Secret},
	http::Request,
};

type HmacSha1 = Hmac<Sha1>;

const POLICY: &str = "oauth1";
const NONCE_LEN: usize = 32;
const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";
// RFC 3986 unreserved characters stay literal.
const RFC3986: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Signs requests with consumer credentials and, when present, an access token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuth1Policy {
	consumer_key: Option<String>,
	consumer_secret: Option<Secret>,
	token: Option<Secret>,
	token_secret: Option<Secret>,
	callback: Option<String>,
}
impl OAuth1Policy {
	/// Creates a consumer-only policy.
	pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<Secret>) -> Self {
		Self {
			consumer_key: Some(consumer_key.into()),
			consumer_secret: Some(consumer_secret.into()),
			token: None,
			token_secret: None,
			callback: None,
		}
	}

	/// Adds an access token and its secret.
	pub fn with_token(mut self, token: impl Into<Secret>, token_secret: impl Into<Secret>) -> Self {
		self.token = Some(token.into());
		self.token_secret = Some(token_secret.into());

		self
	}

	/// Sets the callback sent while no access token is configured.
	pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
		self.callback = Some(callback.into());

		self
	}

	/// Copies the OAuth credential subset out of a configuration.
	pub fn from_configuration(configuration: &Configuration) -> Self {
		Self {
			consumer_key: configuration.consumer_key.clone(),
			consumer_secret: configuration.consumer_secret.clone(),
			token: configuration.oauth_token.clone(),
			token_secret: configuration.oauth_token_secret.clone(),
			callback: configuration.callback.clone(),
		}
	}

	/// Signs `request` with a caller-supplied nonce and timestamp.
	pub fn sign_with(&self, request: Request, nonce: &str, timestamp: i64) -> Result<Request> {
		let consumer_key = self
			.consumer_key
			.as_deref()
			.filter(|value| !value.is_empty())
			.ok_or(Error::CredentialsMissing { policy: POLICY, field: "consumer_key" })?;
		let consumer_secret =
			Secret::require(self.consumer_secret.as_ref(), POLICY, "consumer_secret")?;
		let token = Secret::configured(self.token.as_ref());
		let token_secret = match token {
			Some(_) =>
				Secret::require(self.token_secret.as_ref(), POLICY, "oauth_token_secret")?,
			None => "",
		};
		let mut protocol = vec![
			("oauth_consumer_key", consumer_key.to_owned()),
			("oauth_nonce", nonce.to_owned()),
			("oauth_signature_method", SIGNATURE_METHOD.to_owned()),
			("oauth_timestamp", timestamp.to_string()),
			("oauth_version", OAUTH_VERSION.to_owned()),
		];

		if let Some(token) = token {
			protocol.push(("oauth_token", token.expose().to_owned()));
		} else if let Some(callback) = self.callback.as_deref().filter(|value| !value.is_empty()) {
			protocol.push(("oauth_callback", callback.to_owned()));
		}

		let base = signature_base_string(&request, &protocol);
		let key = format!("{}&{}", encode(consumer_secret), encode(token_secret));
		let signature = hmac_sha1(&key, &base)?;

		protocol.push(("oauth_signature", signature));
		protocol.sort();

		let header = protocol
			.iter()
			.map(|(name, value)| format!("{name}=\"{}\"", encode(value)))
			.collect::<Vec<_>>()
			.join(", ");

		Ok(request.with_header("Authorization", format!("OAuth {header}")))
	}
}
impl RequestSigner for OAuth1Policy {
	fn sign(&self, request: Request) -> Result<Request> {
		self.sign_with(request, &nonce(), OffsetDateTime::now_utc().unix_timestamp())
	}
}

fn nonce() -> String {
	rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect()
}

fn encode(value: &str) -> String {
	utf8_percent_encode(value, RFC3986).to_string()
}

fn signature_base_string(request: &Request, protocol: &[(&str, String)]) -> String {
	let mut base_url = request.url().clone();

	base_url.set_query(None);
	base_url.set_fragment(None);

	let mut params = request
		.url()
		.query_pairs()
		.map(|(name, value)| (encode(&name), encode(&value)))
		.collect::<Vec<_>>();

	if let Some(body) = request.body() {
		params.extend(body.iter().map(|(name, value)| (encode(name), encode(value))));
	}

	params.extend(protocol.iter().map(|(name, value)| (encode(name), encode(value))));
	params.sort();

	let normalized =
		params.iter().map(|(name, value)| format!("{name}={value}")).collect::<Vec<_>>().join("&");

	format!("{}&{}&{}", request.verb().as_str(), encode(base_url.as_str()), encode(&normalized))
}

fn hmac_sha1(key: &str, message: &str) -> Result<String> {
	let mut mac =
		HmacSha1::new_from_slice(key.as_bytes()).map_err(|_| Error::InvalidSigningKey)?;

	mac.update(message.as_bytes());

	Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::http::{Params, Verb};

	const NONCE: &str = "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg";
	const TIMESTAMP: i64 = 1_318_622_958;

	fn twitter_policy() -> OAuth1Policy {
		OAuth1Policy::new("xvz1evFS4wEEPTGEFPHBog", "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw")
			.with_token(
				"370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
				"LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
			)
	}

	fn twitter_request() -> Request {
		let body = Params::from([(
			"status".to_owned(),
			"Hello Ladies + Gentlemen, a signed OAuth request!".to_owned(),
		)]);

		Request::new(
			Verb::Post,
			Url::parse("https://api.twitter.com/1.1/statuses/update.json?include_entities=true")
				.expect("Fixture URL should parse."),
			Some(body),
		)
	}

	fn header_param<'a>(header: &'a str, name: &str) -> Option<&'a str> {
		header
			.trim_start_matches("OAuth ")
			.split(", ")
			.filter_map(|pair| pair.split_once('='))
			.find(|(key, _)| *key == name)
			.map(|(_, value)| value.trim_matches('"'))
	}

	#[test]
	fn base_string_matches_known_vector() {
		let protocol = [
			("oauth_consumer_key", "xvz1evFS4wEEPTGEFPHBog".to_owned()),
			("oauth_nonce", NONCE.to_owned()),
			("oauth_signature_method", SIGNATURE_METHOD.to_owned()),
			("oauth_timestamp", TIMESTAMP.to_string()),
			("oauth_token", "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".to_owned()),
			("oauth_version", OAUTH_VERSION.to_owned()),
		];

		assert_eq!(
			signature_base_string(&twitter_request(), &protocol),
			"POST&https%3A%2F%2Fapi.twitter.com%2F1.1%2Fstatuses%2Fupdate.json&include_entities%3Dtrue%26oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog%26oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1318622958%26oauth_token%3D370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb%26oauth_version%3D1.0%26status%3DHello%2520Ladies%2520%252B%2520Gentlemen%252C%2520a%2520signed%2520OAuth%2520request%2521",
		);
	}

	#[test]
	fn signature_matches_known_vector() {
		let signed = twitter_policy()
			.sign_with(twitter_request(), NONCE, TIMESTAMP)
			.expect("Signing should succeed.");
		let header = signed.header("Authorization").expect("Authorization header should be set.");

		assert!(header.starts_with("OAuth oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\", "));
		assert_eq!(
			header_param(header, "oauth_signature"),
			Some("hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D")
		);
		assert_eq!(header_param(header, "oauth_timestamp"), Some("1318622958"));
		assert_eq!(signed.url(), twitter_request().url());
	}

	#[test]
	fn each_call_draws_a_fresh_nonce() {
		let first = twitter_policy().sign(twitter_request()).expect("Signing should succeed.");
		let second = twitter_policy().sign(twitter_request()).expect("Signing should succeed.");
		let first_nonce = header_param(
			first.header("Authorization").expect("Authorization header should be set."),
			"oauth_nonce",
		)
		.map(str::to_owned);
		let second_nonce = header_param(
			second.header("Authorization").expect("Authorization header should be set."),
			"oauth_nonce",
		)
		.map(str::to_owned);

		assert_eq!(first_nonce.as_ref().map(String::len), Some(NONCE_LEN));
		assert_ne!(first_nonce, second_nonce);
	}

	#[test]
	fn token_without_secret_fails_at_sign_time() {
		let configuration = Configuration::from_attributes([
			("consumer_key", "ck"),
			("consumer_secret", "cs"),
			("oauth_token", "tok"),
		])
		.expect("Fixture attributes should be accepted.");
		let err = OAuth1Policy::from_configuration(&configuration)
			.sign(twitter_request())
			.expect_err("A token without its secret must be rejected.");

		assert!(matches!(
			err,
			Error::CredentialsMissing { policy: "oauth1", field: "oauth_token_secret" }
		));
	}

	#[test]
	fn consumer_only_signing_sends_callback() {
		let signed = OAuth1Policy::new("ck", "cs")
			.with_callback("https://app.example.com/cb")
			.sign_with(twitter_request(), "n", 1)
			.expect("Consumer-only signing should succeed.");
		let header = signed.header("Authorization").expect("Authorization header should be set.");

		assert_eq!(
			header_param(header, "oauth_callback"),
			Some("https%3A%2F%2Fapp.example.com%2Fcb")
		);
		assert_eq!(header_param(header, "oauth_token"), None);
	}

	#[test]
	fn missing_consumer_secret_fails_at_sign_time() {
		let policy = OAuth1Policy::new("ck", "");
		let err = policy.sign(twitter_request()).expect_err("Empty consumer secret must fail.");

		assert!(matches!(
			err,
			Error::CredentialsMissing { policy: "oauth1", field: "consumer_secret" }
		));
	}
}
