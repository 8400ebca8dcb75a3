// Watermark store.
// Reads and atomically rewrites the per-user timestamp file.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local, TimeZone};

use crate::error::{GistError, Result};
use crate::validate::is_valid_timestamp;

/// Default offset appended to every written timestamp, whatever the host zone.
pub const DEFAULT_UTC_OFFSET: &str = "-05:00";

/// Local wall-clock format; the offset is appended verbatim.
const WATERMARK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A validated ISO-8601-like timestamp marking the last successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Watermark(String);

impl Watermark {
    /// Accept `value` if it passes the timestamp character check.
    pub fn parse(value: &str) -> Option<Self> {
        is_valid_timestamp(value).then(|| Self(value.to_string()))
    }

    /// Watermark for the current local time with `utc_offset` appended.
    pub fn now(utc_offset: &str) -> Self {
        Self::at(&Local::now(), utc_offset)
    }

    /// Watermark for `time` rendered as local wall-clock time plus `utc_offset`.
    pub fn at<Tz: TimeZone>(time: &DateTime<Tz>, utc_offset: &str) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self(format!("{}{}", time.format(WATERMARK_FORMAT), utc_offset))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Watermark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read the watermark stored at `path`.
///
/// A missing file is not an error and yields `None`. Content that fails
/// validation, including an empty file or a trailing newline, is reported
/// as a corrupt file.
pub fn read_watermark(path: &Path) -> Result<Option<Watermark>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{}: {}", path.display(), e);
            return Ok(None);
        }
        Err(source) => {
            return Err(GistError::DataFile {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    log::debug!("Validating {:?} as a timestamp", contents);

    match Watermark::parse(&contents) {
        Some(watermark) => Ok(Some(watermark)),
        None => Err(GistError::InvalidTimestamp {
            path: path.to_path_buf(),
            value: contents,
        }),
    }
}

/// Overwrite the watermark at `path`.
pub fn write_watermark(path: &Path, watermark: &Watermark) -> Result<()> {
    write_text(path, watermark.as_str()).map_err(|source| GistError::DataFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Write text atomically via a sibling temp file.
fn write_text(path: &Path, text: &str) -> io::Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    // Keep the username in the temp name; with_extension would drop it
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let result = fs::File::create(&temp_path)
        .and_then(|mut file| {
            file.write_all(text.as_bytes())?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&temp_path, path));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use tempfile::TempDir;

    #[test]
    fn test_watermark_format() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_micro_opt(10, 15, 30, 42)
            .unwrap()
            .and_utc();

        let watermark = Watermark::at(&time, DEFAULT_UTC_OFFSET);
        assert_eq!(watermark.as_str(), "2024-03-01T10:15:30.000042-05:00");
        assert!(is_valid_timestamp(watermark.as_str()));
    }

    #[test]
    fn test_watermarks_order_lexically_by_time() {
        let earlier = Utc::now();
        let later = earlier + chrono::Duration::milliseconds(1500);

        assert!(Watermark::at(&earlier, "-05:00") < Watermark::at(&later, "-05:00"));
    }

    #[test]
    fn test_now_is_valid() {
        let watermark = Watermark::now("+02:00");
        assert!(watermark.as_str().ends_with("+02:00"));
        assert!(Watermark::parse(watermark.as_str()).is_some());
    }

    #[test]
    fn test_write_and_read_watermark() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("eetest-data.octocat");
        let watermark = Watermark::parse("2024-03-01T10:15:30.000042-05:00").unwrap();

        write_watermark(&path, &watermark).unwrap();

        assert_eq!(read_watermark(&path).unwrap(), Some(watermark));
        assert!(!temp_dir.path().join("eetest-data.octocat.tmp").exists());
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("eetest-data.octocat");

        fs::write(&path, "2020-01-01T00:00:00.000000-05:00 and some trailing junk").unwrap();
        let watermark = Watermark::parse("2024-03-01T10:15:30.000000-05:00").unwrap();
        write_watermark(&path, &watermark).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "2024-03-01T10:15:30.000000-05:00"
        );
    }

    #[test]
    fn test_read_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("eetest-data.nobody");

        assert_eq!(read_watermark(&path).unwrap(), None);
    }

    #[test]
    fn test_read_trailing_newline_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("eetest-data.octocat");

        fs::write(&path, "2024-03-01T10:15:30Z\n").unwrap();

        match read_watermark(&path) {
            Err(err @ GistError::InvalidTimestamp { .. }) => {
                assert_eq!(err.exit_code(), crate::error::EXIT_INVALID_FILE)
            }
            other => panic!("expected InvalidTimestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_write_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("eetest-data.octocat");
        // A non-empty directory in the way makes the final rename fail
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();
        let watermark = Watermark::parse("2024-03-01T10:15:30Z").unwrap();

        let err = write_watermark(&path, &watermark).unwrap_err();

        assert!(matches!(err, GistError::DataFile { .. }));
        assert!(!temp_dir.path().join("eetest-data.octocat.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_read_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("eetest-data.octocat");

        fs::write(&path, "last tuesday").unwrap();

        match read_watermark(&path) {
            Err(GistError::InvalidTimestamp { value, .. }) => assert_eq!(value, "last tuesday"),
            other => panic!("expected InvalidTimestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_read_empty_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("eetest-data.octocat");

        fs::write(&path, "").unwrap();

        let err = read_watermark(&path).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INVALID_FILE);
    }

    #[test]
    fn test_read_directory_is_file_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("eetest-data.octocat");
        fs::create_dir(&path).unwrap();

        let err = read_watermark(&path).unwrap_err();
        assert!(matches!(err, GistError::DataFile { .. }));
        assert_eq!(err.exit_code(), crate::error::EXIT_INVALID_FILE);
    }
}
