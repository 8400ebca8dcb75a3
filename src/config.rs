// Run configuration.
// Validated settings threaded through every pipeline stage.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::error::{GistError, Result};
use crate::logging::Verbosity;
use crate::validate::{is_valid_timestamp, is_valid_username};

#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub verbosity: Verbosity,
    pub data_dir: PathBuf,
    pub api_url: String,
    /// `None` means no limit.
    pub timeout: Option<Duration>,
    pub utc_offset: String,
}

impl Config {
    /// Validate parsed arguments into a run configuration.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if !is_valid_username(&cli.githubusername) {
            return Err(GistError::InvalidUsername(cli.githubusername));
        }
        // The offset ends up in the stored watermark, which must stay valid
        if !is_valid_timestamp(&cli.utc_offset) {
            return Err(GistError::InvalidOffset(cli.utc_offset));
        }

        let timeout = (cli.timeout > 0).then(|| Duration::from_secs(cli.timeout));

        Ok(Self {
            username: cli.githubusername,
            verbosity: Verbosity::from(cli.verbose),
            data_dir: cli.data_dir,
            api_url: cli.api_url,
            timeout,
            utc_offset: cli.utc_offset,
        })
    }
}
