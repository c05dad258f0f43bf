//! Token chain builder -- wires concrete providers in priority order.
//!
//! This module lives in `reposcope-infra` because it assembles concrete
//! provider implementations. The resulting chain is passed to `TokenService`
//! in `reposcope-core` via the `DynTokenProvider` abstraction.
//!
//! Default chain order: `[EnvTokenProvider, KeychainTokenProvider]`

use std::sync::Arc;

use reposcope_core::token::DynTokenProvider;

use crate::token::env::EnvTokenProvider;
use crate::token::keychain::KeychainTokenProvider;

/// Build the default token resolution chain.
///
/// The chain is ordered by precedence (first match wins):
/// 1. Environment variables (if `include_env` is true) -- read-only
/// 2. OS keychain (if `keychain` is Some) -- where writes land
///
/// # Arguments
/// - `keychain`: Optional keychain provider (may be unavailable on headless
///   machines without a secret service)
/// - `include_env`: Whether to include the env var provider (usually true)
pub fn build_token_chain(
    keychain: Option<KeychainTokenProvider>,
    include_env: bool,
) -> Vec<DynTokenProvider> {
    let mut chain: Vec<DynTokenProvider> = Vec::new();

    if include_env {
        chain.push(Arc::new(EnvTokenProvider::new()));
    }

    if let Some(kc) = keychain {
        chain.push(Arc::new(kc));
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chain_has_env_then_keychain() {
        let chain = build_token_chain(Some(KeychainTokenProvider::new()), true);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_chain_without_env() {
        let chain = build_token_chain(Some(KeychainTokenProvider::new()), false);
        assert_eq!(chain.len(), 1);
    }
}
