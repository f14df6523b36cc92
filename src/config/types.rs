use crate::config::defaults::{
	DEFAULT_REANNOUNCE_INTERVAL, DEFAULT_REANNOUNCE_MAX_ATTEMPTS, DEFAULT_STATIC_TRACKERS,
	DEFAULT_TRACKER_LIST_URLS,
};
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// qBittorrent WebUI address, e.g. `http://localhost:8080`.
	pub host: String,

	pub username: String,

	pub password: String,

	/// Skip TLS certificate verification when talking to qBittorrent.
	pub tls_skip_verify: bool,

	/// Submit the merged tracker list to newtrackon.com.
	pub contribute_trackers: bool,

	/// Ask qBittorrent to reannounce every torrent once trackers are updated.
	pub reannounce_torrents: bool,

	/// Trackers always placed first in the merged list.
	pub static_trackers: Vec<String>,

	/// Remote newline-separated tracker lists, fetched in this order.
	pub tracker_list_urls: Vec<String>,

	pub reannounce_max_attempts: u32,

	/// Seconds to wait between reannounce attempts.
	pub reannounce_interval: u32,
}

/// One layer of configuration. Every field is optional; unset fields fall
/// through to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigLayer {
	pub host: Option<String>,
	pub username: Option<String>,
	pub password: Option<String>,
	pub tls_skip_verify: Option<bool>,
	pub contribute_trackers: Option<bool>,
	pub reannounce_torrents: Option<bool>,
	pub static_trackers: Option<Vec<String>>,
	#[serde(rename = "trackerListURLs", alias = "trackerListUrls")]
	pub tracker_list_urls: Option<Vec<String>>,
	pub reannounce_max_attempts: Option<u32>,
	pub reannounce_interval: Option<u32>,
}

/// Explicit overrides, typically taken from the command line. These win over
/// every other source.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
	/// Config file to load instead of the environment/default lookup.
	pub config_path: Option<PathBuf>,

	pub layer: ConfigLayer,
}

/// A resolved configuration with the file it was read from, if any.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	pub config: Config,

	pub path: Option<PathBuf>,
}

impl ConfigLayer {
	/// Place `upper` on top of this layer. Fields set in `upper` win.
	pub fn overlay(self, upper: ConfigLayer) -> ConfigLayer {
		ConfigLayer {
			host: upper.host.or(self.host),
			username: upper.username.or(self.username),
			password: upper.password.or(self.password),
			tls_skip_verify: upper.tls_skip_verify.or(self.tls_skip_verify),
			contribute_trackers: upper.contribute_trackers.or(self.contribute_trackers),
			reannounce_torrents: upper.reannounce_torrents.or(self.reannounce_torrents),
			static_trackers: upper.static_trackers.or(self.static_trackers),
			tracker_list_urls: upper.tracker_list_urls.or(self.tracker_list_urls),
			reannounce_max_attempts: upper
				.reannounce_max_attempts
				.or(self.reannounce_max_attempts),
			reannounce_interval: upper.reannounce_interval.or(self.reannounce_interval),
		}
	}
}

impl Config {
	/// Turn a merged layer into a final config.
	///
	/// This is the only place built-in defaults are applied: unset or empty
	/// lists and unset or zero counts take them. The host has no default.
	pub fn from_layer(layer: ConfigLayer) -> Result<Config, ConfigError> {
		let host = layer.host.unwrap_or_default();
		if host.trim().is_empty() {
			return Err(ConfigError::MissingHost);
		}

		let static_trackers = match layer.static_trackers {
			Some(list) if !list.is_empty() => list,
			_ => to_owned_list(DEFAULT_STATIC_TRACKERS),
		};
		let tracker_list_urls = match layer.tracker_list_urls {
			Some(list) if !list.is_empty() => list,
			_ => to_owned_list(DEFAULT_TRACKER_LIST_URLS),
		};

		Ok(Config {
			host,
			username: layer.username.unwrap_or_default(),
			password: layer.password.unwrap_or_default(),
			tls_skip_verify: layer.tls_skip_verify.unwrap_or(false),
			contribute_trackers: layer.contribute_trackers.unwrap_or(false),
			reannounce_torrents: layer.reannounce_torrents.unwrap_or(false),
			static_trackers,
			tracker_list_urls,
			reannounce_max_attempts: non_zero_or(
				layer.reannounce_max_attempts,
				DEFAULT_REANNOUNCE_MAX_ATTEMPTS,
			),
			reannounce_interval: non_zero_or(
				layer.reannounce_interval,
				DEFAULT_REANNOUNCE_INTERVAL,
			),
		})
	}
}

fn non_zero_or(value: Option<u32>, default: u32) -> u32 {
	match value {
		Some(v) if v > 0 => v,
		_ => default,
	}
}

fn to_owned_list(list: &[&str]) -> Vec<String> {
	list.iter().map(|s| s.to_string()).collect()
}
