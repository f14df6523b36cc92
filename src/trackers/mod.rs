//! Tracker list aggregation for qbit-trackers.
//!
//! This module handles:
//! - The ordered, deduplicated tracker list
//! - Fetching and merging remote tracker lists
//! - Contributing trackers to newtrackon.com

pub mod aggregator;
pub mod contribute;

pub use aggregator::{Fetch, aggregate, parse_tracker_lines};
pub use contribute::{Contribute, NEWTRACKON_ADD_URL, Submission};

use std::collections::HashSet;

/// Announce URLs in first-seen order with no exact duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerList {
	entries: Vec<String>,
	seen: HashSet<String>,
}

impl TrackerList {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a tracker unless it is already present. Returns whether it was added.
	pub fn push(&mut self, tracker: impl Into<String>) -> bool {
		let tracker = tracker.into();
		if self.seen.contains(&tracker) {
			return false;
		}
		self.seen.insert(tracker.clone());
		self.entries.push(tracker);
		true
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(String::as_str)
	}

	pub fn as_slice(&self) -> &[String] {
		&self.entries
	}

	pub fn join(&self, separator: &str) -> String {
		self.entries.join(separator)
	}

	/// Format for qBittorrent's multi-line tracker fields, one tracker per tier.
	pub fn to_tiers(&self) -> String {
		self.join("\n\n")
	}
}

impl<S: Into<String>> Extend<S> for TrackerList {
	fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
		for tracker in iter {
			self.push(tracker);
		}
	}
}

impl<S: Into<String>> FromIterator<S> for TrackerList {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		let mut list = TrackerList::new();
		list.extend(iter);
		list
	}
}
