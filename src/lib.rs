//! Typed Trello REST client: pluggable request signing (Basic, OAuth 1.0a), injectable
//! transports, and structured failure reporting in one small crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod resource;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and scripted collaborators for tests; enabled via `cfg(test)` or
	//! the `test` crate feature.

	pub use crate::_prelude::*;

	// std
	use std::collections::VecDeque;
	// self
	use crate::{
		client::Client,
		config::Configuration,
		error::TransportError,
		http::{Request, Response, Transport},
		obs::{ErrorReporter, FailureRecord},
	};

	/// Transport that replays scripted responses and records every request it receives.
	#[derive(Debug, Default)]
	pub struct RecordingTransport {
		script: Mutex<VecDeque<Option<Response>>>,
		requests: Mutex<Vec<Request>>,
	}
	impl RecordingTransport {
		/// Queues a response with the provided status code and body.
		pub fn respond(&self, code: u16, body: impl Into<String>) -> &Self {
			self.script.lock().push_back(Some(Response::new(code, body)));

			self
		}

		/// Queues a "no response" outcome.
		pub fn respond_nothing(&self) -> &Self {
			self.script.lock().push_back(None);

			self
		}

		/// Returns every request executed so far.
		pub fn requests(&self) -> Vec<Request> {
			self.requests.lock().clone()
		}

		/// Returns the most recent request.
		pub fn last_request(&self) -> Request {
			self.requests.lock().last().cloned().expect("Transport should have received a request.")
		}
	}
	impl Transport for RecordingTransport {
		fn execute(&self, request: &Request) -> Result<Option<Response>, TransportError> {
			self.requests.lock().push(request.clone());

			Ok(self.script.lock().pop_front().unwrap_or_else(|| Some(Response::new(200, "{}"))))
		}
	}

	/// Reporter that stores every failure record.
	#[derive(Debug, Default)]
	pub struct RecordingReporter {
		records: Mutex<Vec<FailureRecord>>,
	}
	impl RecordingReporter {
		/// Returns the captured records.
		pub fn records(&self) -> Vec<FailureRecord> {
			self.records.lock().clone()
		}
	}
	impl ErrorReporter for RecordingReporter {
		fn report(&self, record: &FailureRecord) {
			self.records.lock().push(record.clone());
		}
	}

	/// Builds a client wired to scripted collaborators.
	pub fn scripted_client(
		configuration: Configuration,
	) -> (Client, Arc<RecordingTransport>, Arc<RecordingReporter>) {
		let transport = Arc::new(RecordingTransport::default());
		let reporter = Arc::new(RecordingReporter::default());
		let client = Client::builder()
			.configuration(configuration)
			.transport(transport.clone())
			.reporter(reporter.clone())
			.build()
			.expect("Scripted client should build.");

		(client, transport, reporter)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::{Mutex, RwLock};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
