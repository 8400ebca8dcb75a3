// Gist polling pipeline.
// Read watermark, fetch, store new watermark, then print.

use std::io::Write;

use crate::cache::{Watermark, data_file_path, read_watermark, write_watermark};
use crate::config::Config;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::report::print_gists;

/// Run one poll for `config.username`, writing gist URLs to `out`.
///
/// The watermark is advanced as soon as the API answers 200, before the
/// body is parsed, so a malformed body still moves it forward.
pub async fn run<W: Write>(config: &Config, out: &mut W) -> Result<usize> {
    let path = data_file_path(&config.data_dir, &config.username);

    log::debug!(
        "Reading timestamp for user {} from {}",
        config.username,
        path.display()
    );
    let since = read_watermark(&path)?;
    match &since {
        Some(watermark) => log::debug!("Fetching gists updated since {}", watermark),
        None => log::debug!("No previous timestamp found, retrieving full list of gists"),
    }

    let client = GitHubClient::new(&config.api_url, config.timeout)?;
    let body = client
        .get_user_gists(&config.username, since.as_ref())
        .await?;

    let watermark = Watermark::now(&config.utc_offset);
    write_watermark(&path, &watermark)?;
    log::debug!("Stored timestamp {} in {}", watermark, path.display());

    print_gists(out, &body)
}
