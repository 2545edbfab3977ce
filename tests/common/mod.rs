// std
use std::sync::Arc;
// crates.io
use httpmock::MockServer;
use parking_lot::Mutex;
// self
use trello_client::{
	client::Client,
	obs::{ErrorReporter, FailureRecord},
};

/// Reporter that captures every failure record.
#[derive(Default)]
pub struct RecordingReporter(Mutex<Vec<FailureRecord>>);
impl RecordingReporter {
	pub fn records(&self) -> Vec<FailureRecord> {
		self.0.lock().clone()
	}
}
impl ErrorReporter for RecordingReporter {
	fn report(&self, record: &FailureRecord) {
		self.0.lock().push(record.clone());
	}
}

/// Builds a reqwest-backed client pointed at the mock server.
pub fn mock_client(
	server: &MockServer,
	attributes: &[(&str, &str)],
) -> (Client, Arc<RecordingReporter>) {
	let reporter = Arc::new(RecordingReporter::default());
	let base_url = server.base_url();
	let client = Client::builder()
		.attributes([("api_base", base_url.as_str())])
		.and_then(|builder| builder.attributes(attributes.iter().copied()))
		.expect("Mock client attributes should be accepted.")
		.reporter(reporter.clone())
		.build()
		.expect("Mock client should build.");

	(client, reporter)
}
