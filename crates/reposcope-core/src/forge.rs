//! Forge client port trait.

use reposcope_types::error::FetchError;
use reposcope_types::repo::Repo;

/// Trait for forge API backends (GitHub REST in production, fakes in tests).
///
/// Implementations own whatever credential they were constructed with; the
/// orchestration in [`crate::service::RepoService`] only asks questions.
pub trait ForgeClient: Send + Sync {
    /// Resolve the login of the authenticated account.
    ///
    /// Returns `Ok(None)` when no credential is configured. A configured but
    /// rejected credential yields [`FetchError::InvalidCredential`].
    fn viewer_login(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<String>, FetchError>> + Send;

    /// Fetch the authenticated account's full repository set, private
    /// repositories included, capped at the configured page size.
    fn owned_repos(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Repo>, FetchError>> + Send;

    /// Fetch the public repository set for an arbitrary username, capped at
    /// the configured page size, most recently updated first.
    fn public_repos(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Repo>, FetchError>> + Send;
}
