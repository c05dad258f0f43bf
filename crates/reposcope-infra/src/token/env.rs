//! Environment variable token provider.
//!
//! A read-only provider checked before the keychain: `REPOSCOPE_TOKEN`
//! overrides everything, with `GITHUB_TOKEN` as a fallback for users who
//! already export one for other tooling.

use reposcope_core::token::TokenProvider;
use reposcope_types::error::TokenStoreError;

/// Variable names checked in order.
const VAR_NAMES: [&str; 2] = ["REPOSCOPE_TOKEN", "GITHUB_TOKEN"];

/// Environment variable token provider.
///
/// Read-only: `set()` and `delete()` return [`TokenStoreError::ReadOnly`]
/// because environment variables cannot be persistently modified. Users set
/// them via shell config, not through the CLI.
pub struct EnvTokenProvider;

impl EnvTokenProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenProvider for EnvTokenProvider {
    async fn get(&self) -> Result<Option<String>, TokenStoreError> {
        for name in VAR_NAMES {
            match std::env::var(name) {
                Ok(val) if !val.is_empty() => return Ok(Some(val)),
                // Empty, unset, or non-unicode vars all mean "not here"
                _ => continue,
            }
        }
        Ok(None)
    }

    async fn set(&self, _value: &str) -> Result<(), TokenStoreError> {
        Err(TokenStoreError::ReadOnly)
    }

    async fn delete(&self) -> Result<(), TokenStoreError> {
        Err(TokenStoreError::ReadOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mutating the process environment is unsafe in edition 2024 and races
    // with parallel tests, so only the write paths and the not-set path are
    // covered here; the read path is exercised through TokenService mocks.

    #[tokio::test]
    async fn test_set_is_read_only() {
        let provider = EnvTokenProvider::new();
        assert!(matches!(
            provider.set("x").await,
            Err(TokenStoreError::ReadOnly)
        ));
    }

    #[tokio::test]
    async fn test_delete_is_read_only() {
        let provider = EnvTokenProvider::new();
        assert!(matches!(
            provider.delete().await,
            Err(TokenStoreError::ReadOnly)
        ));
    }
}
