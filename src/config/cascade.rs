use crate::config::defaults::{CONFIG_FILE_ENV, DEFAULT_CONFIG_FILES};
use crate::config::parser::parse_config_file;
use crate::config::types::{Config, ConfigLayer, ConfigOverrides, LoadedConfig};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Resolve configuration from the process environment and working directory.
pub fn load_config(overrides: &ConfigOverrides) -> Result<LoadedConfig, ConfigError> {
	let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
	resolve_config(overrides, &cwd, |key| std::env::var(key).ok())
}

/// Resolve configuration by stacking three layers, lowest first:
///
/// 1. The config file (see [`file_layer`])
/// 2. `QBIT_*` environment variables
/// 3. Explicit overrides
///
/// Fields still unset, empty or zero take the built-in defaults in
/// [`Config::from_layer`].
///
/// `env` looks up an environment variable by name.
pub fn resolve_config<F>(
	overrides: &ConfigOverrides,
	cwd: &Path,
	env: F,
) -> Result<LoadedConfig, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let (file, path) = file_layer(overrides, cwd, &env)?;

	let merged = file
		.overlay(env_layer(&env))
		.overlay(overrides.layer.clone());

	let config = Config::from_layer(merged)?;
	Ok(LoadedConfig { config, path })
}

/// Load the config file layer.
///
/// The file is chosen by, in order: the explicit override path, the
/// `QBIT_CONFIG_FILE` environment variable, the first default file name that
/// exists in `cwd`. An explicitly chosen file must load. A default file that
/// fails to parse is skipped with a warning.
pub fn file_layer<F>(
	overrides: &ConfigOverrides,
	cwd: &Path,
	env: &F,
) -> Result<(ConfigLayer, Option<PathBuf>), ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let explicit = overrides
		.config_path
		.clone()
		.or_else(|| non_empty(env(CONFIG_FILE_ENV)).map(PathBuf::from));

	if let Some(path) = explicit {
		let path = cwd.join(path);
		let (layer, _) = parse_config_file(&path)?;
		return Ok((layer, Some(path)));
	}

	for name in DEFAULT_CONFIG_FILES {
		let path = cwd.join(name);
		if !path.exists() {
			continue;
		}
		match parse_config_file(&path) {
			Ok((layer, _)) => return Ok((layer, Some(path))),
			Err(e) => {
				tracing::warn!(
					"Found default config file {} but could not load it: {}",
					path.display(),
					e
				);
			}
		}
	}

	Ok((ConfigLayer::default(), None))
}

/// Build the environment layer. Empty variables count as unset.
pub fn env_layer<F>(env: &F) -> ConfigLayer
where
	F: Fn(&str) -> Option<String>,
{
	let string = |key: &str| non_empty(env(key));
	let boolean = |key: &str| string(key).and_then(|v| parse_env_bool(key, &v));
	let number = |key: &str| string(key).and_then(|v| parse_env_u32(key, &v));
	let list = |key: &str| string(key).map(|v| split_list(&v)).filter(|l| !l.is_empty());

	ConfigLayer {
		host: string("QBIT_HOST"),
		username: string("QBIT_USERNAME"),
		password: string("QBIT_PASSWORD"),
		tls_skip_verify: boolean("QBIT_TLS_SKIP_VERIFY"),
		contribute_trackers: boolean("QBIT_CONTRIBUTE_TRACKERS"),
		reannounce_torrents: boolean("QBIT_REANNOUNCE_TORRENTS"),
		static_trackers: list("QBIT_STATIC_TRACKERS"),
		tracker_list_urls: list("QBIT_TRACKER_LIST_URLS"),
		reannounce_max_attempts: number("QBIT_REANNOUNCE_MAX_ATTEMPTS"),
		reannounce_interval: number("QBIT_REANNOUNCE_INTERVAL"),
	}
}

/// Parse a boolean flag value. Accepts `1`, `t`, `true` and `0`, `f`, `false`
/// in lower, upper or title case.
pub fn parse_bool(value: &str) -> Option<bool> {
	match value {
		"1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
		"0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
		_ => None,
	}
}

fn parse_env_bool(key: &str, value: &str) -> Option<bool> {
	let parsed = parse_bool(value.trim());
	if parsed.is_none() {
		tracing::warn!(
			"Invalid boolean value for environment variable {}: '{}'. Keeping previous value",
			key,
			value
		);
	}
	parsed
}

fn parse_env_u32(key: &str, value: &str) -> Option<u32> {
	match value.trim().parse() {
		Ok(n) => Some(n),
		Err(_) => {
			tracing::warn!(
				"Invalid number for environment variable {}: '{}'. Keeping previous value",
				key,
				value
			);
			None
		}
	}
}

fn split_list(value: &str) -> Vec<String> {
	value
		.split(|c: char| c == ',' || c.is_whitespace())
		.filter(|s| !s.is_empty())
		.map(str::to_string)
		.collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::defaults::{DEFAULT_STATIC_TRACKERS, DEFAULT_TRACKER_LIST_URLS};
	use std::collections::HashMap;
	use std::fs;

	fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |key| map.get(key).cloned()
	}

	fn no_env() -> impl Fn(&str) -> Option<String> {
		env_from(&[])
	}

	fn host_override(host: &str) -> ConfigOverrides {
		ConfigOverrides {
			config_path: None,
			layer: ConfigLayer {
				host: Some(host.to_string()),
				..ConfigLayer::default()
			},
		}
	}

	#[test]
	fn test_parse_bool() {
		for v in ["1", "t", "T", "true", "TRUE", "True"] {
			assert_eq!(parse_bool(v), Some(true), "{v}");
		}
		for v in ["0", "f", "F", "false", "FALSE", "False"] {
			assert_eq!(parse_bool(v), Some(false), "{v}");
		}
		for v in ["yes", "no", "tRuE", "2", ""] {
			assert_eq!(parse_bool(v), None, "{v}");
		}
	}

	#[test]
	fn test_split_list() {
		assert_eq!(
			split_list("udp://a/announce, udp://b/announce\nudp://c/announce,,"),
			vec!["udp://a/announce", "udp://b/announce", "udp://c/announce"]
		);
	}

	#[test]
	fn test_env_layer_reads_all_keys() {
		let env = env_from(&[
			("QBIT_HOST", "http://env:8080"),
			("QBIT_USERNAME", "envuser"),
			("QBIT_PASSWORD", "envpass"),
			("QBIT_TLS_SKIP_VERIFY", "true"),
			("QBIT_CONTRIBUTE_TRACKERS", "1"),
			("QBIT_REANNOUNCE_TORRENTS", "F"),
			("QBIT_STATIC_TRACKERS", "udp://a/announce,udp://b/announce"),
			("QBIT_TRACKER_LIST_URLS", "https://lists.example/a.txt"),
			("QBIT_REANNOUNCE_MAX_ATTEMPTS", "6"),
			("QBIT_REANNOUNCE_INTERVAL", "2"),
		]);
		let layer = env_layer(&env);

		assert_eq!(layer.host.as_deref(), Some("http://env:8080"));
		assert_eq!(layer.username.as_deref(), Some("envuser"));
		assert_eq!(layer.password.as_deref(), Some("envpass"));
		assert_eq!(layer.tls_skip_verify, Some(true));
		assert_eq!(layer.contribute_trackers, Some(true));
		assert_eq!(layer.reannounce_torrents, Some(false));
		assert_eq!(
			layer.static_trackers,
			Some(vec![
				"udp://a/announce".to_string(),
				"udp://b/announce".to_string()
			])
		);
		assert_eq!(
			layer.tracker_list_urls,
			Some(vec!["https://lists.example/a.txt".to_string()])
		);
		assert_eq!(layer.reannounce_max_attempts, Some(6));
		assert_eq!(layer.reannounce_interval, Some(2));
	}

	#[test]
	fn test_env_layer_empty_values_unset() {
		let env = env_from(&[("QBIT_HOST", ""), ("QBIT_STATIC_TRACKERS", " , ")]);
		assert_eq!(env_layer(&env), ConfigLayer::default());
	}

	#[test]
	fn test_invalid_env_bool_keeps_file_value() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(
			temp_dir.path().join("config.yaml"),
			"host: http://file:8080\ntlsSkipVerify: true\n",
		)
		.unwrap();

		let env = env_from(&[
			("QBIT_TLS_SKIP_VERIFY", "definitely"),
			("QBIT_REANNOUNCE_INTERVAL", "soon"),
		]);
		let loaded = resolve_config(&ConfigOverrides::default(), temp_dir.path(), env).unwrap();

		assert!(loaded.config.tls_skip_verify);
		assert_eq!(loaded.config.reannounce_interval, 5);
	}

	#[test]
	fn test_precedence_file_env_override() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(
			temp_dir.path().join("config.yaml"),
			"host: http://a:8080\nusername: fileuser\n",
		)
		.unwrap();

		let loaded =
			resolve_config(&ConfigOverrides::default(), temp_dir.path(), no_env()).unwrap();
		assert_eq!(loaded.config.host, "http://a:8080");

		let env = env_from(&[("QBIT_HOST", "http://b:8080")]);
		let loaded = resolve_config(&ConfigOverrides::default(), temp_dir.path(), &env).unwrap();
		assert_eq!(loaded.config.host, "http://b:8080");
		assert_eq!(loaded.config.username, "fileuser");

		let overrides = host_override("http://c:8080");
		let loaded = resolve_config(&overrides, temp_dir.path(), &env).unwrap();
		assert_eq!(loaded.config.host, "http://c:8080");
		assert_eq!(loaded.config.username, "fileuser");
	}

	#[test]
	fn test_override_false_beats_env_true() {
		let env = env_from(&[
			("QBIT_HOST", "http://b:8080"),
			("QBIT_REANNOUNCE_TORRENTS", "true"),
		]);
		let overrides = ConfigOverrides {
			config_path: None,
			layer: ConfigLayer {
				reannounce_torrents: Some(false),
				..ConfigLayer::default()
			},
		};
		let temp_dir = tempfile::tempdir().unwrap();

		let loaded = resolve_config(&overrides, temp_dir.path(), env).unwrap();
		assert!(!loaded.config.reannounce_torrents);
	}

	#[test]
	fn test_missing_host_everywhere() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(temp_dir.path().join("config.toml"), "username = \"admin\"\n").unwrap();

		let result = resolve_config(&ConfigOverrides::default(), temp_dir.path(), no_env());
		assert!(matches!(result, Err(ConfigError::MissingHost)));
	}

	#[test]
	fn test_defaults_without_file() {
		let temp_dir = tempfile::tempdir().unwrap();

		let overrides = host_override("http://x");
		let loaded = resolve_config(&overrides, temp_dir.path(), no_env()).unwrap();
		let defaults = Config::from_layer(overrides.layer.clone()).unwrap();

		assert!(loaded.path.is_none());
		assert_eq!(loaded.config, defaults);
		assert_eq!(loaded.config.static_trackers, DEFAULT_STATIC_TRACKERS);
		assert_eq!(loaded.config.tracker_list_urls, DEFAULT_TRACKER_LIST_URLS);
		assert_eq!(loaded.config.reannounce_max_attempts, 3);
		assert_eq!(loaded.config.reannounce_interval, 5);
	}

	#[test]
	fn test_zero_values_in_file_use_defaults() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(
			temp_dir.path().join("config.json"),
			r#"{
				"host": "http://a",
				"staticTrackers": [],
				"reannounceMaxAttempts": 0,
				"reannounceInterval": 0
			}"#,
		)
		.unwrap();

		let loaded =
			resolve_config(&ConfigOverrides::default(), temp_dir.path(), no_env()).unwrap();

		assert_eq!(loaded.config.static_trackers, DEFAULT_STATIC_TRACKERS);
		assert_eq!(loaded.config.reannounce_max_attempts, 3);
		assert_eq!(loaded.config.reannounce_interval, 5);
	}

	#[test]
	fn test_default_file_order() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(temp_dir.path().join("config.json"), r#"{"host": "http://json"}"#).unwrap();
		fs::write(temp_dir.path().join("config.toml"), "host = \"http://toml\"\n").unwrap();

		let loaded =
			resolve_config(&ConfigOverrides::default(), temp_dir.path(), no_env()).unwrap();
		assert_eq!(loaded.config.host, "http://toml");
		assert_eq!(loaded.path, Some(temp_dir.path().join("config.toml")));

		fs::write(temp_dir.path().join("config.yml"), "host: http://yml\n").unwrap();
		let loaded =
			resolve_config(&ConfigOverrides::default(), temp_dir.path(), no_env()).unwrap();
		assert_eq!(loaded.config.host, "http://yml");
	}

	#[test]
	fn test_broken_default_file_is_skipped() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(temp_dir.path().join("config.yaml"), "host: [broken").unwrap();
		fs::write(temp_dir.path().join("config.json"), r#"{"host": "http://json"}"#).unwrap();

		let loaded =
			resolve_config(&ConfigOverrides::default(), temp_dir.path(), no_env()).unwrap();
		assert_eq!(loaded.config.host, "http://json");
	}

	#[test]
	fn test_env_config_path() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(temp_dir.path().join("config.yaml"), "host: http://default\n").unwrap();
		fs::write(temp_dir.path().join("custom.toml"), "host = \"http://custom\"\n").unwrap();

		let env = env_from(&[("QBIT_CONFIG_FILE", "custom.toml")]);
		let loaded = resolve_config(&ConfigOverrides::default(), temp_dir.path(), env).unwrap();

		assert_eq!(loaded.config.host, "http://custom");
		assert_eq!(loaded.path, Some(temp_dir.path().join("custom.toml")));
	}

	#[test]
	fn test_override_config_path_beats_env_path() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(temp_dir.path().join("env.yaml"), "host: http://env-file\n").unwrap();
		fs::write(
			temp_dir.path().join("cli.yaml"),
			"host: http://cli-file\nusername: cliuser\n",
		)
		.unwrap();

		let env = env_from(&[("QBIT_CONFIG_FILE", "env.yaml")]);
		let overrides = ConfigOverrides {
			config_path: Some(PathBuf::from("cli.yaml")),
			layer: ConfigLayer {
				username: Some("flaguser".to_string()),
				..ConfigLayer::default()
			},
		};
		let loaded = resolve_config(&overrides, temp_dir.path(), env).unwrap();

		assert_eq!(loaded.config.host, "http://cli-file");
		assert_eq!(loaded.config.username, "flaguser");
	}

	#[test]
	fn test_explicit_missing_file_is_fatal() {
		let temp_dir = tempfile::tempdir().unwrap();
		let overrides = ConfigOverrides {
			config_path: Some(PathBuf::from("nope.yaml")),
			..host_override("http://x")
		};

		let result = resolve_config(&overrides, temp_dir.path(), no_env());
		assert!(matches!(result, Err(ConfigError::Read { .. })));
	}

	#[test]
	fn test_explicit_unparseable_file_is_fatal() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(temp_dir.path().join("qbit.conf"), "host: [broken\n= = =").unwrap();
		let overrides = ConfigOverrides {
			config_path: Some(PathBuf::from("qbit.conf")),
			..host_override("http://x")
		};

		let result = resolve_config(&overrides, temp_dir.path(), no_env());
		assert!(matches!(
			result,
			Err(ConfigError::UnrecognizedFormat { .. })
		));
	}
}
