//! Pushing a tracker list into a torrent client.
//!
//! The workflow is strictly linear: login, list torrents, contribute, update
//! the default trackers, update every torrent, reannounce. Only the first,
//! second and fourth steps can abort a run.

use crate::client::{ReannounceOptions, TorrentClient};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::trackers::{Contribute, Submission, TrackerList};
use serde_json::json;
use std::time::Duration;

/// Outcome of an optional, non-fatal step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
	/// Turned off in configuration.
	Disabled,

	/// Enabled but there was nothing to do.
	Skipped,

	Succeeded,

	/// Failed; the message was logged as a warning.
	Failed(String),
}

/// Summary of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
	pub trackers: usize,
	pub updated: usize,
	pub skipped: usize,
	pub contribution: StepOutcome,
	pub reannounce: StepOutcome,
}

/// Apply `trackers` to the client's default tracker list and to every torrent.
pub fn apply_trackers<C, S>(
	config: &Config,
	trackers: &TrackerList,
	client: &C,
	contributor: &S,
) -> Result<ApplyReport>
where
	C: TorrentClient + ?Sized,
	S: Contribute + ?Sized,
{
	client.login().map_err(Error::Auth)?;
	tracing::info!("Successfully logged into qBittorrent client");

	let torrents = client.torrents().map_err(Error::Enumeration)?;
	tracing::info!("Found {} torrents", torrents.len());

	let contribution = contribute(config, trackers, contributor);

	tracing::info!("Updating qBittorrent client's default trackers...");
	let tiers = trackers.to_tiers();
	client
		.set_preferences(&json!({
			"add_trackers_enabled": true,
			"add_trackers": tiers,
		}))
		.map_err(Error::PreferenceUpdate)?;
	tracing::info!("Successfully updated qBittorrent client's default trackers");

	tracing::info!("Updating trackers for existing torrents...");
	let mut updated = 0;
	let mut skipped = 0;
	for torrent in &torrents {
		match client.add_trackers(&torrent.hash, &tiers) {
			Ok(()) => updated += 1,
			Err(e) => {
				tracing::warn!(
					"Could not update trackers for torrent {} ({}): {}",
					torrent.name,
					torrent.hash,
					e
				);
				skipped += 1;
			}
		}
	}
	tracing::info!(
		"Finished updating trackers for existing torrents. Updated: {}, Skipped/Failed: {}",
		updated,
		skipped
	);

	let reannounce = reannounce(config, client);

	Ok(ApplyReport {
		trackers: trackers.len(),
		updated,
		skipped,
		contribution,
		reannounce,
	})
}

fn contribute<S: Contribute + ?Sized>(
	config: &Config,
	trackers: &TrackerList,
	contributor: &S,
) -> StepOutcome {
	if !config.contribute_trackers {
		return StepOutcome::Disabled;
	}
	if trackers.is_empty() {
		return StepOutcome::Skipped;
	}

	tracing::info!("Contributing {} trackers to newtrackon.com", trackers.len());
	match contributor.submit(trackers) {
		Ok(Submission::Accepted) => {
			tracing::info!("Successfully submitted trackers to newtrackon.com");
			StepOutcome::Succeeded
		}
		Ok(Submission::Rejected { status, body }) => {
			tracing::warn!(
				"Failed to submit trackers to newtrackon.com. Status: {}, Body: {}",
				status,
				body
			);
			StepOutcome::Failed(format!("HTTP {status}"))
		}
		Err(e) => {
			tracing::warn!("Could not submit trackers to newtrackon.com: {}", e);
			StepOutcome::Failed(e.to_string())
		}
	}
}

fn reannounce<C: TorrentClient + ?Sized>(config: &Config, client: &C) -> StepOutcome {
	if !config.reannounce_torrents {
		tracing::info!("Skipping reannounce of torrents because it is disabled");
		return StepOutcome::Disabled;
	}

	tracing::info!("Reannouncing all torrents");
	let options = ReannounceOptions {
		max_attempts: config.reannounce_max_attempts,
		interval: Duration::from_secs(u64::from(config.reannounce_interval)),
	};
	match client.reannounce_all_with_retry(&options) {
		Ok(()) => {
			tracing::info!("Successfully initiated reannounce for all torrents");
			StepOutcome::Succeeded
		}
		Err(e) => {
			tracing::warn!("Failed to reannounce all torrents: {}", e);
			StepOutcome::Failed(e.to_string())
		}
	}
}
