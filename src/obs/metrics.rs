// self
use crate::{http::Verb, obs::RequestOutcome};

/// Records a dispatch outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(verb: Verb, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"trello_client_request_total",
			"verb" => verb.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (verb, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_request_outcome_without_recorder() {
		record_request_outcome(Verb::Post, RequestOutcome::Failed);
	}
}
