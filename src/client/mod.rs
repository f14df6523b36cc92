//! Torrent client access for qbit-trackers.
//!
//! This module handles:
//! - The capability interface the update workflow drives
//! - A qBittorrent WebUI API implementation of it

pub mod qbittorrent;

pub use qbittorrent::QBittorrentClient;

use crate::error::ClientError;
use serde::Deserialize;
use std::time::Duration;

/// A torrent known to the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Torrent {
	pub hash: String,
	pub name: String,
}

/// How hard to retry a reannounce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReannounceOptions {
	pub max_attempts: u32,
	pub interval: Duration,
}

/// Operations the update workflow needs from a torrent client.
pub trait TorrentClient {
	/// Start an authenticated session.
	fn login(&self) -> Result<(), ClientError>;

	/// Every torrent currently known to the client, in the client's order.
	fn torrents(&self) -> Result<Vec<Torrent>, ClientError>;

	/// Update application preferences. `prefs` is a JSON object of changed keys.
	fn set_preferences(&self, prefs: &serde_json::Value) -> Result<(), ClientError>;

	/// Add newline-separated tracker URLs to one torrent.
	fn add_trackers(&self, hash: &str, urls: &str) -> Result<(), ClientError>;

	/// Reannounce every torrent, retrying failed attempts.
	fn reannounce_all_with_retry(&self, options: &ReannounceOptions) -> Result<(), ClientError>;
}
