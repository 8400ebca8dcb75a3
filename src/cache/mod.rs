// Watermark cache.
// Remembers when each user's gists were last fetched.

pub mod paths;
pub mod store;

pub use paths::data_file_path;
pub use store::{DEFAULT_UTC_OFFSET, Watermark, read_watermark, write_watermark};
