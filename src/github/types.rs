// GitHub API response types.
// Only the fields gistwatch reads are modeled.

use serde::Deserialize;

/// A gist as listed by `GET /users/{username}/gists`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Gist {
    /// API URL of the gist.
    pub url: String,
}
