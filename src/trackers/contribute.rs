use crate::error::ContributeError;
use crate::trackers::TrackerList;

/// newtrackon.com endpoint accepting new tracker submissions.
pub const NEWTRACKON_ADD_URL: &str = "https://newtrackon.com/api/add";

/// Form field newtrackon.com reads the space-separated trackers from.
pub const NEWTRACKON_FIELD: &str = "new_trackers";

/// How the aggregator answered a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
	Accepted,

	/// Any status other than 200 or 204.
	Rejected { status: u16, body: String },
}

impl Submission {
	pub fn from_status(status: u16, body: String) -> Self {
		match status {
			200 | 204 => Submission::Accepted,
			_ => Submission::Rejected { status, body },
		}
	}
}

/// Submits discovered trackers to a public tracker aggregator.
pub trait Contribute {
	fn submit(&self, trackers: &TrackerList) -> Result<Submission, ContributeError>;
}
