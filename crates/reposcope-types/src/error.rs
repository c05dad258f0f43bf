use thiserror::Error;

/// Errors from fetching a repository list off the forge.
///
/// All variants are surfaced at the CLI boundary as user-visible messages;
/// none are fatal beyond the current invocation.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The stored credential was rejected by the forge (401 on an
    /// authenticated call, or any failure validating it against `/user`).
    #[error("invalid token or unauthorized access")]
    InvalidCredential,

    /// Unauthenticated listing returned a non-success status: the user does
    /// not exist, or the anonymous rate limit was exhausted. The forge does
    /// not let us tell the two apart without inspecting headers.
    #[error("user not found or API rate limit exceeded")]
    NotFoundOrRateLimited,

    /// Authenticated listing failed with a non-401 status.
    #[error("failed to fetch repositories (HTTP {status})")]
    FetchFailed { status: u16 },

    /// Network-level failure (DNS, connect, body read).
    #[error("request failed: {0}")]
    Transport(String),

    /// The forge answered with a body we could not decode.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Errors from token storage backends.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("token not found")]
    NotFound,

    /// The backend cannot be written to (e.g. environment variables).
    #[error("token provider is read-only")]
    ReadOnly,

    #[error("token storage error: {0}")]
    Backend(String),
}
