//! Repository fetch orchestration.
//!
//! Decides which forge endpoint serves a request: when a credential is
//! present and belongs to the viewed account, the owner endpoint (private
//! repositories included); otherwise the public listing. The decision is
//! re-made on every fetch -- nothing is cached.

use tracing::debug;

use reposcope_types::error::FetchError;
use reposcope_types::repo::Repo;

use crate::forge::ForgeClient;

/// Orchestrates repository fetches over a [`ForgeClient`].
pub struct RepoService<C: ForgeClient> {
    client: C,
}

impl<C: ForgeClient> RepoService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetch the repository list for `username`.
    ///
    /// 1. If a credential is configured, validate it; a rejected credential
    ///    fails the whole fetch with [`FetchError::InvalidCredential`].
    /// 2. If the authenticated login matches `username` case-insensitively,
    ///    fetch the owner listing (private repositories included).
    /// 3. Otherwise fetch the public listing for `username`.
    pub async fn fetch_repos(&self, username: &str) -> Result<Vec<Repo>, FetchError> {
        match self.client.viewer_login().await? {
            Some(login) if login.eq_ignore_ascii_case(username) => {
                debug!(username, "credential owns the viewed account, using owner endpoint");
                self.client.owned_repos().await
            }
            viewer => {
                debug!(
                    username,
                    authenticated = viewer.is_some(),
                    "using public endpoint"
                );
                self.client.public_repos(username).await
            }
        }
    }
}
