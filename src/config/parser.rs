use crate::config::types::ConfigLayer;
use crate::error::{ConfigError, FormatError};
use std::fmt;
use std::path::Path;

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
	Yaml,
	Toml,
	Json,
}

impl ConfigFormat {
	/// Order in which formats are tried when the extension gives no hint.
	pub const FALLBACK_ORDER: [ConfigFormat; 3] =
		[ConfigFormat::Yaml, ConfigFormat::Toml, ConfigFormat::Json];

	/// Pick a format from the file extension (case-insensitive).
	pub fn from_path(path: &Path) -> Option<ConfigFormat> {
		let ext = path.extension()?.to_str()?.to_ascii_lowercase();
		match ext.as_str() {
			"yaml" | "yml" => Some(ConfigFormat::Yaml),
			"toml" => Some(ConfigFormat::Toml),
			"json" => Some(ConfigFormat::Json),
			_ => None,
		}
	}

	/// Parse `content` as this format.
	pub fn parse(self, content: &str) -> Result<ConfigLayer, FormatError> {
		let layer = match self {
			ConfigFormat::Yaml => serde_yaml::from_str(content)?,
			ConfigFormat::Toml => toml::from_str(content)?,
			ConfigFormat::Json => serde_json::from_str(content)?,
		};
		Ok(layer)
	}
}

impl fmt::Display for ConfigFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ConfigFormat::Yaml => "YAML",
			ConfigFormat::Toml => "TOML",
			ConfigFormat::Json => "JSON",
		})
	}
}

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<(ConfigLayer, ConfigFormat), ConfigError> {
	tracing::info!("Loading configuration from file: {}", path.display());

	let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse config content, using `path` only for its extension and for errors.
///
/// A known extension selects exactly one parser. Otherwise each format in
/// [`ConfigFormat::FALLBACK_ORDER`] is tried and the first success wins.
pub fn parse_config_str(
	content: &str,
	path: &Path,
) -> Result<(ConfigLayer, ConfigFormat), ConfigError> {
	let hinted = ConfigFormat::from_path(path);

	if content.trim().is_empty() {
		return Ok((ConfigLayer::default(), hinted.unwrap_or(ConfigFormat::Yaml)));
	}

	if let Some(format) = hinted {
		let layer = format.parse(content).map_err(|source| ConfigError::Parse {
			path: path.to_path_buf(),
			format,
			source,
		})?;
		tracing::info!("Parsed {} configuration file", format);
		return Ok((layer, format));
	}

	for format in ConfigFormat::FALLBACK_ORDER {
		match format.parse(content) {
			Ok(layer) => {
				tracing::info!("Parsed {} configuration file", format);
				return Ok((layer, format));
			}
			Err(e) => tracing::debug!("{} is not {}: {}", path.display(), format, e),
		}
	}

	Err(ConfigError::UnrecognizedFormat {
		path: path.to_path_buf(),
	})
}
