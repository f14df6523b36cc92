//! Configuration resolution for qbit-trackers.
//!
//! This module handles:
//! - YAML, TOML and JSON config file parsing with format fallback
//! - Config file discovery
//! - Layering defaults, file, environment and explicit overrides

pub mod cascade;
pub mod defaults;
pub mod parser;
pub mod types;

pub use cascade::{env_layer, file_layer, load_config, parse_bool, resolve_config};
pub use parser::{ConfigFormat, parse_config_file, parse_config_str};
pub use types::{Config, ConfigLayer, ConfigOverrides, LoadedConfig};
