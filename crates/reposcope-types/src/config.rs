use serde::{Deserialize, Serialize};

/// The forge's per_page ceiling; also the fixed page size of the viewer.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Global configuration, loaded from `{data_dir}/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Base URL of the forge REST API.
    pub api_base: String,
    /// Repositories requested per fetch, capped at [`MAX_PAGE_SIZE`].
    pub page_size: u32,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            page_size: MAX_PAGE_SIZE,
        }
    }
}

impl GlobalConfig {
    /// The effective page size, never above the forge's ceiling.
    pub fn effective_page_size(&self) -> u32 {
        self.page_size.min(MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GlobalConfig::default();
        assert_eq!(config.api_base, "https://api.github.com");
        assert_eq!(config.page_size, 100);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GlobalConfig = toml::from_str("page_size = 25").unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.api_base, "https://api.github.com");
    }

    #[test]
    fn test_effective_page_size_is_capped() {
        let config: GlobalConfig = toml::from_str("page_size = 500").unwrap();
        assert_eq!(config.effective_page_size(), MAX_PAGE_SIZE);
    }
}
