//! GithubClient -- concrete [`ForgeClient`] implementation for the GitHub
//! REST v3 API.
//!
//! The access token is wrapped in [`secrecy::SecretString`], injected at
//! construction, and only exposed when building the `Authorization` header.
//! It never appears in Debug output or tracing logs.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use reposcope_core::forge::ForgeClient;
use reposcope_types::config::GlobalConfig;
use reposcope_types::error::FetchError;
use reposcope_types::repo::Repo;

use super::types::{GithubRepo, GithubUser};

/// GitHub REST API client.
///
/// Holds the optional credential for the whole fetch cycle; whether a call
/// is authenticated is decided here, not by the orchestration above.
pub struct GithubClient {
    http: reqwest::Client,
    token: Option<SecretString>,
    base_url: String,
    page_size: u32,
}

impl GithubClient {
    /// Media type GitHub's v3 API expects.
    const ACCEPT: &'static str = "application/vnd.github.v3+json";

    /// Create a new client for the configured forge.
    ///
    /// `token` is the explicitly injected credential; `None` means every
    /// call goes out unauthenticated.
    pub fn new(config: &GlobalConfig, token: Option<SecretString>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("reposcope/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            http,
            token,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            page_size: config.effective_page_size(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn owned_repos_path(&self) -> String {
        format!(
            "/user/repos?visibility=all&affiliation=owner&per_page={}",
            self.page_size
        )
    }

    fn public_repos_path(&self, username: &str) -> String {
        format!(
            "/users/{username}/repos?type=all&sort=updated&per_page={}",
            self.page_size
        )
    }

    /// GET `path` with the `Accept` header and, when a token is configured,
    /// the `Authorization: token <value>` header.
    async fn get(&self, path: &str) -> Result<reqwest::Response, FetchError> {
        let mut request = self.http.get(self.url(path)).header("Accept", Self::ACCEPT);

        if let Some(token) = &self.token {
            request = request.header(
                "Authorization",
                format!("token {}", token.expose_secret()),
            );
        }

        request
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }

    async fn decode_repos(response: reqwest::Response) -> Result<Vec<Repo>, FetchError> {
        let raw: Vec<GithubRepo> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(raw.into_iter().map(Repo::from).collect())
    }
}

// GithubClient does not derive Debug; the SecretString field would be
// masked, but omitting Debug entirely keeps the token out of any dump.

impl ForgeClient for GithubClient {
    async fn viewer_login(&self) -> Result<Option<String>, FetchError> {
        if self.token.is_none() {
            return Ok(None);
        }

        let response = self.get("/user").await?;
        if !response.status().is_success() {
            return Err(FetchError::InvalidCredential);
        }

        let user: GithubUser = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        debug!(login = %user.login, "credential validated");
        Ok(Some(user.login))
    }

    async fn owned_repos(&self) -> Result<Vec<Repo>, FetchError> {
        let response = self.get(&self.owned_repos_path()).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                401 => FetchError::InvalidCredential,
                code => FetchError::FetchFailed { status: code },
            });
        }

        Self::decode_repos(response).await
    }

    async fn public_repos(&self, username: &str) -> Result<Vec<Repo>, FetchError> {
        let response = self.get(&self.public_repos_path(username)).await?;

        let status = response.status();
        if !status.is_success() {
            // 401 can only happen when a (bad) token rode along
            return Err(match status.as_u16() {
                401 => FetchError::InvalidCredential,
                _ => FetchError::NotFoundOrRateLimited,
            });
        }

        Self::decode_repos(response).await
    }
}
