//! Access-token storage: provider port trait and resolution chain.
//!
//! TokenService resolves the forge credential through a chain of providers
//! in priority order (env vars > OS keychain). Providers are trait objects
//! so heterogeneous backends can share one chain; the RPITIT [`TokenProvider`]
//! trait gets a dyn-compatible [`BoxedTokenProvider`] adapter via a blanket
//! impl.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use reposcope_types::error::TokenStoreError;

/// Trait for token storage backends (keychain, environment).
///
/// A backend stores at most one credential; there is no key namespace
/// beyond the backend's own service scoping.
pub trait TokenProvider: Send + Sync {
    /// Retrieve the stored token. Returns `None` when this provider has no
    /// value.
    fn get(&self) -> impl Future<Output = Result<Option<String>, TokenStoreError>> + Send;

    /// Store a token value. Read-only providers return
    /// [`TokenStoreError::ReadOnly`].
    fn set(&self, value: &str) -> impl Future<Output = Result<(), TokenStoreError>> + Send;

    /// Remove the stored token. Returns [`TokenStoreError::NotFound`] when
    /// no value exists in this provider.
    fn delete(&self) -> impl Future<Output = Result<(), TokenStoreError>> + Send;
}

/// Dyn-compatible form of [`TokenProvider`], implemented for every provider
/// via the blanket impl below. Needed because `impl Future` trait methods
/// cannot be used through `dyn`.
pub trait BoxedTokenProvider: Send + Sync {
    fn get_boxed(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, TokenStoreError>> + Send + '_>>;

    fn set_boxed<'a>(
        &'a self,
        value: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), TokenStoreError>> + Send + 'a>>;

    fn delete_boxed(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<(), TokenStoreError>> + Send + '_>>;
}

impl<P: TokenProvider> BoxedTokenProvider for P {
    fn get_boxed(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, TokenStoreError>> + Send + '_>> {
        Box::pin(self.get())
    }

    fn set_boxed<'a>(
        &'a self,
        value: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), TokenStoreError>> + Send + 'a>> {
        Box::pin(self.set(value))
    }

    fn delete_boxed(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<(), TokenStoreError>> + Send + '_>> {
        Box::pin(self.delete())
    }
}

/// Shared handle to a provider in the chain.
pub type DynTokenProvider = Arc<dyn BoxedTokenProvider>;

/// Service resolving the single forge credential across storage backends.
///
/// Providers are ordered by precedence (first match wins). Writes go to the
/// first writable provider; read-only providers (env vars) are skipped.
pub struct TokenService {
    providers: Vec<DynTokenProvider>,
}

impl TokenService {
    /// Create a new TokenService with the given provider chain, ordered by
    /// precedence (highest priority first).
    pub fn new(providers: Vec<DynTokenProvider>) -> Self {
        Self { providers }
    }

    /// Resolve the credential, or `None` when no provider has one.
    pub async fn get_token(&self) -> Result<Option<String>, TokenStoreError> {
        for provider in &self.providers {
            if let Some(value) = provider.get_boxed().await? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Store a credential in the first writable provider.
    ///
    /// An empty value clears the stored credential instead -- the original
    /// surface treated "save empty token" as removal.
    pub async fn set_token(&self, value: &str) -> Result<(), TokenStoreError> {
        if value.is_empty() {
            return self.clear_token().await;
        }

        for provider in &self.providers {
            match provider.set_boxed(value).await {
                Ok(()) => return Ok(()),
                Err(TokenStoreError::ReadOnly) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(TokenStoreError::Backend(
            "no writable token provider available".to_string(),
        ))
    }

    /// Remove the credential from every provider that holds one.
    ///
    /// Succeeds even when nothing was stored: clearing an absent credential
    /// is a no-op, not an error.
    pub async fn clear_token(&self) -> Result<(), TokenStoreError> {
        for provider in &self.providers {
            match provider.delete_boxed().await {
                Ok(()) => {}
                Err(TokenStoreError::NotFound | TokenStoreError::ReadOnly) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Mask a token value, showing only the last 4 characters.
    ///
    /// - "ghp_abcdefghijklmnop" -> "****mnop"
    /// - "abc" -> "****" (too short to show any chars)
    ///
    /// The credential is an opaque string, so the tail is taken by
    /// characters, never by bytes.
    pub fn mask_token(value: &str) -> String {
        let count = value.chars().count();
        if count <= 4 {
            "****".to_string()
        } else {
            let tail: String = value.chars().skip(count - 4).collect();
            format!("****{tail}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory provider, optionally read-only.
    struct MockProvider {
        value: Mutex<Option<String>>,
        writable: bool,
    }

    impl MockProvider {
        fn empty(writable: bool) -> Self {
            Self {
                value: Mutex::new(None),
                writable,
            }
        }

        fn with_value(value: &str, writable: bool) -> Self {
            Self {
                value: Mutex::new(Some(value.to_string())),
                writable,
            }
        }
    }

    impl TokenProvider for MockProvider {
        async fn get(&self) -> Result<Option<String>, TokenStoreError> {
            Ok(self.value.lock().unwrap().clone())
        }

        async fn set(&self, value: &str) -> Result<(), TokenStoreError> {
            if !self.writable {
                return Err(TokenStoreError::ReadOnly);
            }
            *self.value.lock().unwrap() = Some(value.to_string());
            Ok(())
        }

        async fn delete(&self) -> Result<(), TokenStoreError> {
            if !self.writable {
                return Err(TokenStoreError::ReadOnly);
            }
            match self.value.lock().unwrap().take() {
                Some(_) => Ok(()),
                None => Err(TokenStoreError::NotFound),
            }
        }
    }

    #[tokio::test]
    async fn test_get_prefers_earlier_provider() {
        let service = TokenService::new(vec![
            Arc::new(MockProvider::with_value("from-env", false)),
            Arc::new(MockProvider::with_value("from-keychain", true)),
        ]);

        assert_eq!(
            service.get_token().await.unwrap(),
            Some("from-env".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_falls_through_empty_providers() {
        let service = TokenService::new(vec![
            Arc::new(MockProvider::empty(false)),
            Arc::new(MockProvider::with_value("stored", true)),
        ]);

        assert_eq!(service.get_token().await.unwrap(), Some("stored".to_string()));
    }

    #[tokio::test]
    async fn test_set_skips_read_only_providers() {
        let keychain = Arc::new(MockProvider::empty(true));
        let service = TokenService::new(vec![
            Arc::new(MockProvider::empty(false)),
            keychain.clone(),
        ]);

        service.set_token("ghp_secret").await.unwrap();
        assert_eq!(
            *keychain.value.lock().unwrap(),
            Some("ghp_secret".to_string())
        );
    }

    #[tokio::test]
    async fn test_set_fails_with_no_writable_provider() {
        let service = TokenService::new(vec![Arc::new(MockProvider::empty(false))]);
        assert!(service.set_token("ghp_secret").await.is_err());
    }

    #[tokio::test]
    async fn test_empty_value_clears_stored_token() {
        let keychain = Arc::new(MockProvider::with_value("old", true));
        let service = TokenService::new(vec![keychain.clone()]);

        service.set_token("").await.unwrap();
        assert!(keychain.value.lock().unwrap().is_none());
        assert_eq!(service.get_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_when_nothing_stored_is_ok() {
        let service = TokenService::new(vec![Arc::new(MockProvider::empty(true))]);
        service.clear_token().await.unwrap();
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(TokenService::mask_token("ghp_abcdefgh1234"), "****1234");
        assert_eq!(TokenService::mask_token("abc"), "****");
        assert_eq!(TokenService::mask_token(""), "****");
    }

    #[test]
    fn test_mask_token_non_ascii() {
        // tokens are opaque strings; a multi-byte tail must not panic
        assert_eq!(TokenService::mask_token("ααx"), "****");
        assert_eq!(TokenService::mask_token("token-αβγδ"), "****αβγδ");
        assert_eq!(TokenService::mask_token("ghp_秘密の鍵x"), "****密の鍵x");
    }
}
