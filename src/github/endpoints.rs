// GitHub API endpoint functions.
// Gist listing for a single user, one page, optionally filtered by `since`.

use crate::cache::Watermark;
use crate::error::Result;

use super::client::GitHubClient;

impl GitHubClient {
    /// Fetch the raw body of a user's gist list.
    ///
    /// The body is returned unparsed so the caller can persist the new
    /// watermark before deciding whether the payload is well formed.
    pub async fn get_user_gists(
        &self,
        username: &str,
        since: Option<&Watermark>,
    ) -> Result<String> {
        let endpoint = format!("/users/{}/gists", username);
        let params: Vec<(&str, &str)> = since
            .map(|watermark| vec![("since", watermark.as_str())])
            .unwrap_or_default();

        log::debug!("Retrieving list of gists for user {}", username);
        log::debug!("Querying URL: {}", self.url(&endpoint));

        let response = self.get_with_params(&endpoint, &params).await?;
        let body = response.text().await?;

        log::debug!("API response:\n{}", body);
        Ok(body)
    }
}
