//! Application state wiring config and services together.
//!
//! AppState holds what every command needs: the loaded configuration and the
//! token service. The forge client is built per invocation once the
//! credential has been resolved, so the token stays an explicitly injected
//! value rather than ambient state.

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;

use reposcope_core::token::TokenService;
use reposcope_infra::config::{load_global_config, resolve_data_dir};
use reposcope_infra::github::GithubClient;
use reposcope_infra::token::chain::build_token_chain;
use reposcope_infra::token::keychain::KeychainTokenProvider;
use reposcope_types::config::GlobalConfig;
use reposcope_types::error::TokenStoreError;

/// Shared application state for all CLI commands.
pub struct AppState {
    pub token_service: Arc<TokenService>,
    pub config: GlobalConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: resolve the data dir, load config,
    /// wire the token chain.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_global_config(&data_dir).await;

        let chain = build_token_chain(Some(KeychainTokenProvider::new()), true);
        let token_service = TokenService::new(chain);

        Ok(Self {
            token_service: Arc::new(token_service),
            config,
            data_dir,
        })
    }

    /// Build a forge client carrying the currently resolved credential.
    pub async fn github_client(&self) -> Result<GithubClient, TokenStoreError> {
        let token = self
            .token_service
            .get_token()
            .await?
            .map(SecretString::from);

        Ok(GithubClient::new(&self.config, token))
    }
}
