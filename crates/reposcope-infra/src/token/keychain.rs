//! OS keychain adapter for token storage.
//!
//! Uses the `keyring` crate to store the single forge credential via:
//! - macOS Keychain
//! - Linux Secret Service (GNOME Keyring, KDE Wallet)
//! - Windows Credential Manager
//!
//! This is the persisted store -- the analog of the original surface's
//! browser local storage entry.

use reposcope_core::token::TokenProvider;
use reposcope_types::error::TokenStoreError;

/// OS keychain token provider using the `keyring` crate.
///
/// Stores exactly one entry under a fixed service/key pair.
pub struct KeychainTokenProvider {
    service_name: String,
}

impl KeychainTokenProvider {
    /// The keychain entry name for the forge credential.
    const ENTRY: &'static str = "forge-token";

    /// Create a provider with the default service name "reposcope".
    pub fn new() -> Self {
        Self {
            service_name: "reposcope".to_string(),
        }
    }

    /// Create a provider with a custom service name (useful for testing).
    pub fn with_service(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }

    fn entry(&self) -> Result<keyring::Entry, TokenStoreError> {
        keyring::Entry::new(&self.service_name, Self::ENTRY)
            .map_err(|e| TokenStoreError::Backend(format!("keychain entry error: {e}")))
    }
}

impl Default for KeychainTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenProvider for KeychainTokenProvider {
    async fn get(&self) -> Result<Option<String>, TokenStoreError> {
        let entry = self.entry()?;

        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(TokenStoreError::Backend(format!("keychain get error: {e}"))),
        }
    }

    async fn set(&self, value: &str) -> Result<(), TokenStoreError> {
        let entry = self.entry()?;

        entry
            .set_password(value)
            .map_err(|e| TokenStoreError::Backend(format!("keychain set error: {e}")))
    }

    async fn delete(&self) -> Result<(), TokenStoreError> {
        let entry = self.entry()?;

        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Err(TokenStoreError::NotFound),
            Err(e) => Err(TokenStoreError::Backend(format!(
                "keychain delete error: {e}"
            ))),
        }
    }
}
