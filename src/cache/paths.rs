// Data file path utilities.
// One watermark file per username, kept in the data directory.

use std::path::{Path, PathBuf};

/// File name prefix for per-user watermark files.
pub const DATA_FILE_PREFIX: &str = "eetest-data.";

/// File name of a user's watermark file.
pub fn data_file_name(username: &str) -> String {
    format!("{}{}", DATA_FILE_PREFIX, username)
}

/// Path to a user's watermark file inside `data_dir`.
pub fn data_file_path(data_dir: &Path, username: &str) -> PathBuf {
    data_dir.join(data_file_name(username))
}
