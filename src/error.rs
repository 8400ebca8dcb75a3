// Error types for gistwatch.
// Every failure carries the exit code it terminates the process with.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Bad command line argument.
pub const EXIT_INVALID_ARGUMENT: u8 = 1;
/// Corrupt, unreadable or unwritable timestamp file.
pub const EXIT_INVALID_FILE: u8 = 2;
/// Non-200 response, transport failure, malformed body or undeliverable output.
pub const EXIT_API: u8 = 3;

#[derive(Error, Debug)]
pub enum GistError {
    #[error("Invalid GitHub username: {0}")]
    InvalidUsername(String),

    #[error("Invalid UTC offset: {0}")]
    InvalidOffset(String),

    #[error("Invalid timestamp in file {}: {value}", path.display())]
    InvalidTimestamp { path: PathBuf, value: String },

    #[error("Cannot access data file {}: {source}", path.display())]
    DataFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error querying URL {url}, response code {}", status.as_u16())]
    Status { url: String, status: StatusCode },

    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Malformed API response: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "Error: Incorrect structure of API response, run the script with -v flag for more details"
    )]
    IncorrectStructure { index: usize },

    #[error("Cannot write output: {0}")]
    Output(std::io::Error),
}

impl GistError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            GistError::InvalidUsername(_) | GistError::InvalidOffset(_) => EXIT_INVALID_ARGUMENT,
            GistError::InvalidTimestamp { .. } | GistError::DataFile { .. } => EXIT_INVALID_FILE,
            GistError::Status { .. }
            | GistError::Api(_)
            | GistError::Json(_)
            | GistError::IncorrectStructure { .. }
            | GistError::Output(_) => EXIT_API,
        }
    }
}

pub type Result<T> = std::result::Result<T, GistError>;
