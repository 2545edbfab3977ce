//! The Trello client: configuration, policy selection, dispatch, and response interpretation.
//!
//! [`Client`] is a cheap handle around shared state. Clones refer to the same client, and
//! equality is identity, which is what a record's back-reference compares against. Each
//! client privately owns its [`Configuration`] and its cached [`AuthPolicy`]; nothing is
//! shared between separately built clients.

pub mod resources;

// std
use std::sync::OnceLock;
// self
use crate::{
	_prelude::*,
	auth::AuthPolicy,
	config::Configuration,
	error::ConfigError,
	http::{Params, Request, Response, Transport, Verb},
	obs::{
		ErrorReporter, FailureKind, FailureRecord, RequestOutcome, RequestSpan, TracingReporter,
	},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

const SUCCESS_CODES: [u16; 2] = [200, 201];
const EXPIRED_TOKEN_MARKER: &str = "expired token";

/// Handle used to issue Trello API calls.
#[derive(Clone)]
pub struct Client(Arc<ClientInner>);

struct ClientInner {
	configuration: RwLock<Configuration>,
	auth_policy: OnceLock<Arc<AuthPolicy>>,
	transport: Arc<dyn Transport>,
	reporter: Arc<dyn ErrorReporter>,
}

impl Client {
	/// Creates a builder with default configuration and the tracing reporter.
	pub fn builder() -> ClientBuilder {
		ClientBuilder::new()
	}

	/// Creates an unauthenticated client backed by the reqwest transport.
	#[cfg(feature = "reqwest")]
	pub fn new() -> Result<Self> {
		Self::builder().build()
	}

	/// Creates a reqwest-backed client populated from `(key, value)` attribute pairs.
	#[cfg(feature = "reqwest")]
	pub fn with_attributes<I, K, V>(attributes: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		Self::builder().attributes(attributes)?.build()
	}

	/// Runs `f` against a staged copy of the configuration, then stores the copy.
	///
	/// No lock is held while `f` runs, so `f` may call back into the client; such calls see the
	/// configuration as it was before `f`. Concurrent `configure` calls are last-writer-wins.
	///
	/// Credentials changed here do not reach an authorization policy that has already been
	/// cached by an earlier request; build a new client to pick them up.
	pub fn configure<F, T>(&self, f: F) -> T
	where
		F: FnOnce(&mut Configuration) -> T,
	{
		let mut staged = self.configuration();
		let output = f(&mut staged);

		*self.0.configuration.write() = staged;

		output
	}

	/// Bulk-assigns configuration attributes, rejecting unknown keys.
	pub fn set_attributes<I, K, V>(&self, attributes: I) -> Result<()>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		self.configure(|configuration| configuration.assign(attributes)).map_err(Error::from)
	}

	/// Returns a snapshot of the current configuration.
	pub fn configuration(&self) -> Configuration {
		self.0.configuration.read().clone()
	}

	/// Returns the authorization policy, resolving it from the configuration on first use.
	pub fn auth_policy(&self) -> Arc<AuthPolicy> {
		self.0
			.auth_policy
			.get_or_init(|| Arc::new(AuthPolicy::from_configuration(&self.0.configuration.read())))
			.clone()
	}

	/// Issues `GET {path}`, appending `params` as the query string when non-empty.
	pub fn get(&self, path: &str, params: &Params) -> Result<String> {
		let mut url = self.endpoint(path)?;

		if !params.is_empty() {
			url.query_pairs_mut().extend_pairs(params.iter());
		}

		self.invoke_verb(Verb::Get, url, None)
	}

	/// Issues `POST {path}` with a form body.
	pub fn post(&self, path: &str, body: Params) -> Result<String> {
		let url = self.endpoint(path)?;

		self.invoke_verb(Verb::Post, url, Some(body))
	}

	/// Issues `PUT {path}` with a form body.
	pub fn put(&self, path: &str, body: Params) -> Result<String> {
		let url = self.endpoint(path)?;

		self.invoke_verb(Verb::Put, url, Some(body))
	}

	/// Issues `DELETE {path}`.
	pub fn delete(&self, path: &str) -> Result<String> {
		let url = self.endpoint(path)?;

		self.invoke_verb(Verb::Delete, url, None)
	}

	fn endpoint(&self, path: &str) -> Result<Url> {
		self.0.configuration.read().endpoint(path).map_err(Error::from)
	}

	fn invoke_verb(&self, verb: Verb, url: Url, body: Option<Params>) -> Result<String> {
		let span = RequestSpan::enter(verb, url.path());
		let request = Request::new(verb, url.clone(), body);
		let response = self
			.auth_policy()
			.authorize(request)
			.and_then(|request| self.0.transport.execute(&request).map_err(Error::from));
		let response = match response {
			Ok(Some(response)) => response,
			// No response object is an empty success rather than an error.
			Ok(None) => {
				span.finish(RequestOutcome::Empty);

				return Ok(String::new());
			},
			Err(e) => {
				span.finish(RequestOutcome::TransportError);

				return Err(e);
			},
		};

		if response.code == 401 && response.body.contains(EXPIRED_TOKEN_MARKER) {
			self.report(FailureKind::ExpiredToken, verb, url, &response);
			span.finish(RequestOutcome::ExpiredToken);

			return Err(Error::ExpiredToken { body: response.body });
		}
		if !SUCCESS_CODES.contains(&response.code) {
			self.report(FailureKind::RequestFailed, verb, url, &response);
			span.finish(RequestOutcome::Failed);

			return Err(Error::RequestFailed { status: response.code, body: response.body });
		}

		span.finish(RequestOutcome::Success);

		Ok(response.body)
	}

	fn report(&self, kind: FailureKind, verb: Verb, url: Url, response: &Response) {
		self.0.reporter.report(&FailureRecord {
			kind,
			code: response.code,
			verb,
			url,
			body: response.body.clone(),
		});
	}
}
impl PartialEq for Client {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}
impl Eq for Client {}
impl Debug for Client {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut debug = f.debug_struct("Client");

		// `try_read` keeps Debug from blocking behind a concurrent write.
		if let Some(configuration) = self.0.configuration.try_read() {
			debug
				.field("api_base", &configuration.api_base.as_str())
				.field("auth_mode", &configuration.auth_mode());
		}

		debug.field("auth_policy_cached", &self.0.auth_policy.get().is_some()).finish()
	}
}

/// Builder for [`Client`] values.
pub struct ClientBuilder {
	configuration: Configuration,
	transport: Option<Arc<dyn Transport>>,
	reporter: Arc<dyn ErrorReporter>,
}
impl ClientBuilder {
	/// Creates a builder with default configuration and the tracing reporter.
	pub fn new() -> Self {
		Self {
			configuration: Configuration::default(),
			transport: None,
			reporter: Arc::new(TracingReporter),
		}
	}

	/// Replaces the configuration.
	pub fn configuration(mut self, configuration: Configuration) -> Self {
		self.configuration = configuration;

		self
	}

	/// Bulk-assigns attributes onto the current configuration.
	pub fn attributes<I, K, V>(mut self, attributes: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		self.configuration.assign(attributes)?;

		Ok(self)
	}

	/// Overrides the transport.
	pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
		self.transport = Some(transport);

		self
	}

	/// Overrides the failure reporter.
	pub fn reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
		self.reporter = reporter;

		self
	}

	/// Builds the client, provisioning the reqwest transport when none was supplied.
	pub fn build(self) -> Result<Client> {
		let transport = match self.transport {
			Some(transport) => transport,
			None => default_transport()?,
		};

		Ok(Client(Arc::new(ClientInner {
			configuration: RwLock::new(self.configuration),
			auth_policy: OnceLock::new(),
			transport,
			reporter: self.reporter,
		})))
	}
}
impl Default for ClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}
impl Debug for ClientBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientBuilder")
			.field("configuration", &self.configuration)
			.field("transport_set", &self.transport.is_some())
			.finish()
	}
}

#[cfg(feature = "reqwest")]
fn default_transport() -> Result<Arc<dyn Transport>> {
	Ok(Arc::new(ReqwestTransport::new()?))
}

#[cfg(not(feature = "reqwest"))]
fn default_transport() -> Result<Arc<dyn Transport>> {
	Err(ConfigError::MissingTransport.into())
}
