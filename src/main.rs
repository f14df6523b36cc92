use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use qbit_trackers::Error;
use qbit_trackers::apply::{StepOutcome, apply_trackers};
use qbit_trackers::client::QBittorrentClient;
use qbit_trackers::config::{ConfigLayer, ConfigOverrides, LoadedConfig, load_config};
use qbit_trackers::http::HttpTransport;
use qbit_trackers::trackers::aggregate;

#[derive(Parser)]
#[command(name = "qbit-trackers")]
#[command(
	author,
	version,
	about = "Refresh qBittorrent's tracker list from public tracker lists"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	#[command(flatten)]
	overrides: OverrideArgs,

	/// Enable debug logging
	#[arg(short, long, global = true)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration inspection commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the resolved configuration
	Show,
	/// Resolve the configuration and report any error without contacting anything
	Validate,
}

/// Explicit settings. These win over the environment and config files.
#[derive(Args)]
struct OverrideArgs {
	/// Path to config file (YAML, TOML, or JSON). Env: QBIT_CONFIG_FILE
	#[arg(long, global = true, value_name = "PATH")]
	config: Option<PathBuf>,

	/// qBittorrent host (e.g. http://localhost:8080). Env: QBIT_HOST
	#[arg(long, global = true)]
	host: Option<String>,

	/// qBittorrent username. Env: QBIT_USERNAME
	#[arg(long, global = true)]
	username: Option<String>,

	/// qBittorrent password. Env: QBIT_PASSWORD
	#[arg(long, global = true)]
	password: Option<String>,

	/// Skip TLS certificate verification for qBittorrent. Env: QBIT_TLS_SKIP_VERIFY
	#[arg(
		long,
		alias = "tlsSkipVerify",
		global = true,
		value_name = "BOOL",
		num_args = 0..=1,
		require_equals = true,
		default_missing_value = "true"
	)]
	tls_skip_verify: Option<bool>,

	/// Contribute found trackers to newtrackon.com. Env: QBIT_CONTRIBUTE_TRACKERS
	#[arg(
		long,
		alias = "contributeTrackers",
		global = true,
		value_name = "BOOL",
		num_args = 0..=1,
		require_equals = true,
		default_missing_value = "true"
	)]
	contribute_trackers: Option<bool>,

	/// Reannounce all torrents after updating trackers. Env: QBIT_REANNOUNCE_TORRENTS
	#[arg(
		long,
		alias = "reannounceTorrents",
		global = true,
		value_name = "BOOL",
		num_args = 0..=1,
		require_equals = true,
		default_missing_value = "true"
	)]
	reannounce_torrents: Option<bool>,

	/// Tracker always placed first; repeat for several. Env: QBIT_STATIC_TRACKERS
	#[arg(long = "static-tracker", alias = "staticTracker", global = true, value_name = "URL")]
	static_trackers: Vec<String>,

	/// Remote tracker list to fetch; repeat for several. Env: QBIT_TRACKER_LIST_URLS
	#[arg(long = "tracker-list-url", alias = "trackerListURL", global = true, value_name = "URL")]
	tracker_list_urls: Vec<String>,

	/// Reannounce attempts before giving up. Env: QBIT_REANNOUNCE_MAX_ATTEMPTS
	#[arg(long, alias = "reannounceMaxAttempts", global = true, value_name = "N")]
	reannounce_max_attempts: Option<u32>,

	/// Seconds between reannounce attempts. Env: QBIT_REANNOUNCE_INTERVAL
	#[arg(long, alias = "reannounceInterval", global = true, value_name = "SECS")]
	reannounce_interval: Option<u32>,
}

impl From<OverrideArgs> for ConfigOverrides {
	fn from(args: OverrideArgs) -> Self {
		let list = |v: Vec<String>| if v.is_empty() { None } else { Some(v) };

		ConfigOverrides {
			config_path: args.config,
			layer: ConfigLayer {
				host: args.host,
				username: args.username,
				password: args.password,
				tls_skip_verify: args.tls_skip_verify,
				contribute_trackers: args.contribute_trackers,
				reannounce_torrents: args.reannounce_torrents,
				static_trackers: list(args.static_trackers),
				tracker_list_urls: list(args.tracker_list_urls),
				reannounce_max_attempts: args.reannounce_max_attempts,
				reannounce_interval: args.reannounce_interval,
			},
		}
	}
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:#}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let overrides = ConfigOverrides::from(cli.overrides);

	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(&overrides),
				ConfigAction::Validate => handle_config_validate(&overrides),
			},
		};
	}

	handle_update(&overrides)
}

fn init_logging(verbose: bool) {
	// --verbose forces DEBUG; otherwise RUST_LOG decides, defaulting to INFO.
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
	};
	let _ = tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr))
		.with(filter)
		.try_init();
}

fn handle_update(overrides: &ConfigOverrides) -> Result<ExitCode> {
	let loaded = load_config(overrides).map_err(Error::from)?;
	let config = &loaded.config;

	let http = HttpTransport::new().context("Failed to build HTTP client")?;
	let trackers = aggregate(config, &http).map_err(Error::from)?;

	let client = QBittorrentClient::new(config).context("Failed to build qBittorrent client")?;
	tracing::info!(
		"Connecting to qBittorrent at {} (TLS Skip Verify: {})",
		client.base_url(),
		config.tls_skip_verify
	);

	let report = apply_trackers(config, &trackers, &client, &http)?;

	tracing::info!(
		"Finished. Trackers: {}, Updated: {}, Skipped/Failed: {}, Contribution: {}, Reannounce: {}",
		report.trackers,
		report.updated,
		report.skipped,
		describe(&report.contribution),
		describe(&report.reannounce)
	);
	Ok(ExitCode::SUCCESS)
}

fn describe(outcome: &StepOutcome) -> &str {
	match outcome {
		StepOutcome::Disabled => "disabled",
		StepOutcome::Skipped => "skipped",
		StepOutcome::Succeeded => "ok",
		StepOutcome::Failed(_) => "failed",
	}
}

fn handle_config_show(overrides: &ConfigOverrides) -> Result<ExitCode> {
	let LoadedConfig { config, path } = load_config(overrides).context("Configuration error")?;

	match path {
		Some(path) => println!("# Source: {}", path.display()),
		None => println!("# Source: (no config file)"),
	}
	println!("host: {}", config.host);
	println!("username: {}", config.username);
	println!(
		"password: {}",
		if config.password.is_empty() { "" } else { "********" }
	);
	println!("tlsSkipVerify: {}", config.tls_skip_verify);
	println!("contributeTrackers: {}", config.contribute_trackers);
	println!("reannounceTorrents: {}", config.reannounce_torrents);
	println!("reannounceMaxAttempts: {}", config.reannounce_max_attempts);
	println!("reannounceInterval: {}", config.reannounce_interval);

	println!("staticTrackers:");
	for tracker in &config.static_trackers {
		println!("  - {}", tracker);
	}
	println!("trackerListURLs:");
	for url in &config.tracker_list_urls {
		println!("  - {}", url);
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(overrides: &ConfigOverrides) -> Result<ExitCode> {
	match load_config(overrides) {
		Ok(loaded) => {
			match loaded.path {
				Some(path) => println!("Configuration is valid ({})", path.display()),
				None => println!("Configuration is valid (no config file)"),
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("error: {:#}", anyhow::Error::from(e));
			Ok(ExitCode::FAILURE)
		}
	}
}
