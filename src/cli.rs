// Command line interface.
// Positional username plus an optional `-v [true|false]` switch.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::cache::DEFAULT_UTC_OFFSET;
use crate::github::GITHUB_API_BASE;

/// Seconds before an unanswered request is abandoned.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug)]
#[command(name = "gistwatch")]
#[command(about = "GitHub gist data retrieval tool", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// GitHub username (lowercase letters and digits only)
    pub githubusername: String,

    /// More verbosity
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub verbose: bool,

    /// Directory holding the per-user timestamp files
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = GITHUB_API_BASE)]
    pub api_url: String,

    /// Request timeout in seconds, 0 waits forever
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Offset appended to the stored local time
    #[arg(long, default_value = DEFAULT_UTC_OFFSET, allow_hyphen_values = true)]
    pub utc_offset: String,
}
