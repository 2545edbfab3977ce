// self
use crate::{_prelude::*, http::Verb};

/// Failure categories surfaced to an [`ErrorReporter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
	/// HTTP 401 carrying the expired-token marker.
	ExpiredToken,
	/// Any status outside the accepted set.
	RequestFailed,
}

/// Structured record handed to the reporter before the matching error is raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureRecord {
	/// Failure category.
	pub kind: FailureKind,
	/// HTTP status code.
	pub code: u16,
	/// Request verb.
	pub verb: Verb,
	/// Request URL (before authorization material was attached).
	pub url: Url,
	/// Raw response body.
	pub body: String,
}
impl FailureRecord {
	/// Renders the one-line log message for the record.
	pub fn message(&self) -> String {
		match self.kind {
			FailureKind::ExpiredToken => format!(
				"[{} {} {}]: Your access token has expired.",
				self.code, self.verb, self.url
			),
			FailureKind::RequestFailed =>
				format!("[{} {} {}]: {}", self.code, self.verb, self.url, self.body),
		}
	}
}

/// Receives failure records from the client.
pub trait ErrorReporter
where
	Self: Send + Sync,
{
	/// Called once per failed response, before the error reaches the caller.
	fn report(&self, record: &FailureRecord);
}

/// Default reporter that forwards records to `tracing` (no-op without the feature).
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;
impl ErrorReporter for TracingReporter {
	fn report(&self, record: &FailureRecord) {
		#[cfg(feature = "tracing")]
		{
			tracing::error!(
				code = record.code,
				verb = record.verb.as_str(),
				url = %record.url,
				body = %record.body,
				"{}",
				record.message()
			);
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = record;
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn record(kind: FailureKind, code: u16) -> FailureRecord {
		FailureRecord {
			kind,
			code,
			verb: Verb::Get,
			url: Url::parse("https://api.trello.com/1/boards/abc")
				.expect("Fixture URL should parse."),
			body: "invalid token".into(),
		}
	}

	#[test]
	fn messages_include_code_verb_and_url() {
		assert_eq!(
			record(FailureKind::ExpiredToken, 401).message(),
			"[401 GET https://api.trello.com/1/boards/abc]: Your access token has expired."
		);
		assert_eq!(
			record(FailureKind::RequestFailed, 404).message(),
			"[404 GET https://api.trello.com/1/boards/abc]: invalid token"
		);
	}

	#[test]
	fn tracing_reporter_accepts_records() {
		TracingReporter.report(&record(FailureKind::RequestFailed, 500));
	}
}
