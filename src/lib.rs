//! qbit-trackers - keep qBittorrent's tracker list fresh from public tracker lists.
//!
//! This library provides the core functionality, including:
//! - Layered configuration from defaults, files, environment and overrides
//! - Fetching, merging and deduplicating tracker lists
//! - Applying the merged list to a qBittorrent client and its torrents
//!
//! # Example
//!
//! ```no_run
//! use qbit_trackers::apply::apply_trackers;
//! use qbit_trackers::client::QBittorrentClient;
//! use qbit_trackers::config::{ConfigOverrides, load_config};
//! use qbit_trackers::http::HttpTransport;
//! use qbit_trackers::trackers::aggregate;
//!
//! let loaded = load_config(&ConfigOverrides::default()).unwrap();
//! let http = HttpTransport::new().unwrap();
//! let trackers = aggregate(&loaded.config, &http).unwrap();
//!
//! let client = QBittorrentClient::new(&loaded.config).unwrap();
//! let report = apply_trackers(&loaded.config, &trackers, &client, &http).unwrap();
//! println!("Updated {} torrents", report.updated);
//! ```

pub mod apply;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod trackers;

pub use error::{Error, Result};
