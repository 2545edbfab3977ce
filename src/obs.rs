//! Observability helpers for client requests.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `trello_client.request` with `verb`, `path`
//!   and `outcome` fields, and to route [`TracingReporter`] records to `tracing::error!`.
//! - Enable `metrics` to increment the `trello_client_request_total` counter for every dispatch,
//!   labeled by `verb` + `outcome`.

mod metrics;
mod report;
mod tracing;

pub use metrics::*;
pub use report::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Accepted status code.
	Success,
	/// Transport produced no response object.
	Empty,
	/// Trello reported an expired token.
	ExpiredToken,
	/// Any other rejected status code.
	Failed,
	/// Signing or transport failed before a status code was available.
	TransportError,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Success => "success",
			RequestOutcome::Empty => "empty",
			RequestOutcome::ExpiredToken => "expired_token",
			RequestOutcome::Failed => "failed",
			RequestOutcome::TransportError => "transport_error",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
