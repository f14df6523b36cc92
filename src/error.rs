use crate::config::ConfigFormat;
use std::path::PathBuf;

/// Errors raised while resolving configuration.
///
/// All of these are fatal and surface before any network activity.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Failed to read config file: {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse {format} config file: {path}")]
	Parse {
		path: PathBuf,
		format: ConfigFormat,
		#[source]
		source: FormatError,
	},

	#[error("Unrecognized config file format (tried YAML, TOML and JSON): {path}")]
	UnrecognizedFormat { path: PathBuf },

	#[error(
		"qBittorrent host must be set via --host, the QBIT_HOST environment variable, or a config file"
	)]
	MissingHost,
}

/// Parser-specific failure for one config format.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
	#[error(transparent)]
	Yaml(#[from] serde_yaml::Error),

	#[error(transparent)]
	Toml(#[from] toml::de::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

/// A remote tracker list could not be retrieved.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
	#[error("Failed to fetch tracker list: {url}")]
	Request {
		url: String,
		#[source]
		source: reqwest::Error,
	},

	#[error("Tracker list {url} answered with HTTP {status}")]
	Status { url: String, status: u16 },
}

impl FetchError {
	/// The source URL that failed.
	pub fn url(&self) -> &str {
		match self {
			FetchError::Request { url, .. } | FetchError::Status { url, .. } => url,
		}
	}
}

/// Failures talking to the torrent client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
	#[error("HTTP request to qBittorrent failed")]
	Http(#[from] reqwest::Error),

	#[error("qBittorrent rejected the username or password")]
	LoginFailed,

	#[error("qBittorrent has banned this IP after too many failed logins")]
	Banned,

	#[error("qBittorrent endpoint {endpoint} answered with HTTP {status}")]
	UnexpectedStatus { endpoint: String, status: u16 },

	#[error("Reannounce still failing after {attempts} attempts")]
	ReannounceExhausted {
		attempts: u32,
		#[source]
		source: Box<ClientError>,
	},
}

/// Submitting trackers to the public aggregator failed at the transport level.
#[derive(Debug, thiserror::Error)]
pub enum ContributeError {
	#[error("Failed to submit trackers to {url}")]
	Request {
		url: String,
		#[source]
		source: reqwest::Error,
	},
}

/// Fatal errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error("Could not get trackers list")]
	Fetch(#[from] FetchError),

	#[error("Could not log into qBittorrent client")]
	Auth(#[source] ClientError),

	#[error("Could not get torrents from client")]
	Enumeration(#[source] ClientError),

	#[error("Could not update qBittorrent client's default trackers")]
	PreferenceUpdate(#[source] ClientError),
}

/// Result type alias using the run-level Error.
pub type Result<T> = std::result::Result<T, Error>;
