use crate::client::{ReannounceOptions, Torrent, TorrentClient};
use crate::config::Config;
use crate::error::ClientError;
use crate::http::{REQUEST_TIMEOUT, USER_AGENT};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::REFERER;

/// qBittorrent WebUI API v2 client with a cookie-based session.
#[derive(Debug)]
pub struct QBittorrentClient {
	http: Client,
	base_url: String,
	username: String,
	password: String,
}

impl QBittorrentClient {
	pub fn new(config: &Config) -> Result<Self, ClientError> {
		let http = Client::builder()
			.user_agent(USER_AGENT)
			.timeout(REQUEST_TIMEOUT)
			.cookie_store(true)
			.danger_accept_invalid_certs(config.tls_skip_verify)
			.build()?;

		Ok(QBittorrentClient {
			http,
			base_url: normalize_host(&config.host),
			username: config.username.clone(),
			password: config.password.clone(),
		})
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn endpoint(&self, path: &str) -> String {
		format!("{}/api/v2/{}", self.base_url, path)
	}

	fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<Response, ClientError> {
		let response = self.http.post(self.endpoint(path)).form(form).send()?;
		check_status(path, response)
	}
}

impl TorrentClient for QBittorrentClient {
	fn login(&self) -> Result<(), ClientError> {
		let response = self
			.http
			.post(self.endpoint("auth/login"))
			.header(REFERER, &self.base_url)
			.form(&[
				("username", self.username.as_str()),
				("password", self.password.as_str()),
			])
			.send()?;

		if response.status() == StatusCode::FORBIDDEN {
			return Err(ClientError::Banned);
		}
		let response = check_status("auth/login", response)?;

		// qBittorrent answers 200 either way and signals success in the body.
		let body = response.text()?;
		if body.trim() == "Fails." {
			return Err(ClientError::LoginFailed);
		}
		Ok(())
	}

	fn torrents(&self) -> Result<Vec<Torrent>, ClientError> {
		let response = self.http.get(self.endpoint("torrents/info")).send()?;
		let torrents: Vec<Torrent> = check_status("torrents/info", response)?.json()?;
		Ok(torrents)
	}

	fn set_preferences(&self, prefs: &serde_json::Value) -> Result<(), ClientError> {
		let json = prefs.to_string();
		self.post_form("app/setPreferences", &[("json", json.as_str())])?;
		Ok(())
	}

	fn add_trackers(&self, hash: &str, urls: &str) -> Result<(), ClientError> {
		self.post_form("torrents/addTrackers", &[("hash", hash), ("urls", urls)])?;
		Ok(())
	}

	fn reannounce_all_with_retry(&self, options: &ReannounceOptions) -> Result<(), ClientError> {
		retry(options, |attempt| {
			tracing::debug!("Reannounce attempt {}/{}", attempt, options.max_attempts);
			self.post_form("torrents/reannounce", &[("hashes", "all")])
				.map(|_| ())
		})
	}
}

fn check_status(path: &str, response: Response) -> Result<Response, ClientError> {
	let status = response.status();
	if !status.is_success() {
		return Err(ClientError::UnexpectedStatus {
			endpoint: path.to_string(),
			status: status.as_u16(),
		});
	}
	Ok(response)
}

/// Run `op` up to `max_attempts` times, sleeping `interval` after each failure
/// that still has an attempt left.
fn retry<F>(options: &ReannounceOptions, mut op: F) -> Result<(), ClientError>
where
	F: FnMut(u32) -> Result<(), ClientError>,
{
	let attempts = options.max_attempts.max(1);
	let mut attempt = 1;
	loop {
		match op(attempt) {
			Ok(()) => return Ok(()),
			Err(e) if attempt >= attempts => {
				return Err(ClientError::ReannounceExhausted {
					attempts,
					source: Box::new(e),
				});
			}
			Err(e) => {
				tracing::debug!("Reannounce attempt {} failed: {}", attempt, e);
				std::thread::sleep(options.interval);
				attempt += 1;
			}
		}
	}
}

/// Strip trailing slashes and assume `http://` when no scheme is given.
pub fn normalize_host(host: &str) -> String {
	let host = host.trim().trim_end_matches('/');
	if host.contains("://") {
		host.to_string()
	} else {
		format!("http://{host}")
	}
}
