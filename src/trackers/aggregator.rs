use crate::config::Config;
use crate::error::FetchError;
use crate::trackers::TrackerList;

/// Retrieves the body of a remote tracker list.
pub trait Fetch {
	fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Split a newline-separated tracker list into trimmed, non-empty entries.
pub fn parse_tracker_lines(body: &str) -> impl Iterator<Item = &str> {
	body.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Merge the static trackers with every remote list.
///
/// Static trackers come first, then each source in configured order. The
/// first failing source aborts the whole aggregation.
pub fn aggregate<F: Fetch + ?Sized>(
	config: &Config,
	fetcher: &F,
) -> Result<TrackerList, FetchError> {
	let mut trackers: TrackerList = config.static_trackers.iter().cloned().collect();

	for url in &config.tracker_list_urls {
		tracing::debug!("Fetching tracker list {}", url);
		let body = fetcher.fetch_text(url)?;

		let before = trackers.len();
		let mut found = 0usize;
		for line in parse_tracker_lines(&body) {
			found += 1;
			trackers.push(line);
		}
		tracing::debug!(
			"{} listed {} trackers, {} new",
			url,
			found,
			trackers.len() - before
		);
	}

	tracing::info!("Fetched {} unique trackers", trackers.len());
	Ok(trackers)
}
