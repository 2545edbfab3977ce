// self
use crate::{
	_prelude::*,
	http::Verb,
	obs::{self, RequestOutcome},
};

/// Entered `trello_client.request` span that lives for one dispatch.
///
/// The span carries `verb` and `path` from the start; [`RequestSpan::finish`] fills in `outcome`
/// and bumps the request counter.
pub struct RequestSpan {
	verb: Verb,
	#[cfg(feature = "tracing")]
	entered: tracing::span::EnteredSpan,
}
impl RequestSpan {
	/// Opens and enters the span.
	pub fn enter(verb: Verb, path: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"trello_client.request",
				verb = verb.as_str(),
				path,
				outcome = tracing::field::Empty,
			);

			Self { verb, entered: span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = path;

			Self { verb }
		}
	}

	/// Records how the dispatch ended.
	pub fn finish(&self, outcome: RequestOutcome) {
		#[cfg(feature = "tracing")]
		self.entered.record("outcome", outcome.as_str());

		obs::record_request_outcome(self.verb, outcome);
	}
}
impl Debug for RequestSpan {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RequestSpan").field("verb", &self.verb).finish_non_exhaustive()
	}
}
