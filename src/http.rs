//! Outbound HTTP used for remote tracker lists and contributions.

use crate::error::{ContributeError, FetchError};
use crate::trackers::contribute::NEWTRACKON_FIELD;
use crate::trackers::{Contribute, Fetch, NEWTRACKON_ADD_URL, Submission, TrackerList};
use reqwest::blocking::Client;
use std::time::Duration;

/// Applied to every request made by this crate.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP transport for public endpoints.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: Client,
}

impl HttpTransport {
	pub fn new() -> Result<Self, reqwest::Error> {
		let client = Client::builder()
			.user_agent(USER_AGENT)
			.timeout(REQUEST_TIMEOUT)
			.build()?;

		Ok(HttpTransport { client })
	}
}

impl Fetch for HttpTransport {
	fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
		let request_error = |source: reqwest::Error| FetchError::Request {
			url: url.to_string(),
			source,
		};

		let response = self.client.get(url).send().map_err(request_error)?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status {
				url: url.to_string(),
				status: status.as_u16(),
			});
		}

		response.text().map_err(request_error)
	}
}

impl HttpTransport {
	fn submit_to(&self, url: &str, trackers: &TrackerList) -> Result<Submission, ContributeError> {
		let joined = trackers.join(" ");
		let response = self
			.client
			.post(url)
			.form(&[(NEWTRACKON_FIELD, joined.as_str())])
			.send()
			.map_err(|source| ContributeError::Request {
				url: url.to_string(),
				source,
			})?;

		let status = response.status().as_u16();
		let body = response.text().unwrap_or_default();
		Ok(Submission::from_status(status, body))
	}
}

impl Contribute for HttpTransport {
	fn submit(&self, trackers: &TrackerList) -> Result<Submission, ContributeError> {
		self.submit_to(NEWTRACKON_ADD_URL, trackers)
	}
}
