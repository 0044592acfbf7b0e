//! Builder configuration.

use anyhow::{Context, Result};
use discount_catalog::{CatalogEndpoint, RetryPolicy};
use discount_core::rows::EmptyConfirm;
use discount_core::search::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Catalog search endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://stageapi.monkcommerce.app/task/products/search";

/// Builder configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Catalog search configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Picker behaviour.
    #[serde(default)]
    pub picker: PickerConfig,
}

impl BuilderConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML config")
    }
}

/// Catalog search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Search endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Sent as `x-api-key` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Products per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Retries after a failed search.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_attempts() -> u32 {
    1
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            page_size: default_page_size(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl CatalogConfig {
    pub fn endpoint(&self) -> CatalogEndpoint {
        let endpoint = CatalogEndpoint::new(self.endpoint.clone());
        match &self.api_key {
            Some(key) => endpoint.with_api_key(key.clone()),
            None => endpoint,
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts)
    }
}

/// Picker behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Distance from the bottom, in pixels, that triggers the next page.
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,

    /// What confirming an empty selection does to the target row.
    #[serde(default)]
    pub empty_confirm: EmptyConfirm,
}

fn default_scroll_threshold() -> f64 {
    10.0
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: default_scroll_threshold(),
            empty_confirm: EmptyConfirm::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuilderConfig::from_toml_str("").unwrap();
        assert_eq!(config, BuilderConfig::default());
        assert_eq!(config.catalog.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.catalog.page_size, 10);
        assert_eq!(config.catalog.max_attempts, 1);
        assert_eq!(config.picker.scroll_threshold, 10.0);
        assert_eq!(config.picker.empty_confirm, EmptyConfirm::Keep);
    }

    #[test]
    fn test_parse_toml() {
        let config = BuilderConfig::from_toml_str(
            r#"
            [catalog]
            endpoint = "https://api.example.com/search"
            api_key = "secret"
            page_size = 25

            [picker]
            empty_confirm = "clear"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.page_size, 25);
        assert_eq!(config.catalog.max_attempts, 1);
        assert_eq!(config.picker.empty_confirm, EmptyConfirm::Clear);
        assert_eq!(
            config.catalog.endpoint().headers().last(),
            Some(&("x-api-key", "secret".to_string()))
        );
    }

    #[test]
    fn test_rejects_unknown_empty_confirm() {
        let err = BuilderConfig::from_toml_str("[picker]\nempty_confirm = \"drop\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML config"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = BuilderConfig::load("/nonexistent/discount.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_json() {
        let path = std::env::temp_dir().join("discount-builder-config-test.json");
        std::fs::write(&path, r#"{"catalog":{"page_size":5}}"#).unwrap();
        let config = BuilderConfig::load(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.catalog.page_size, 5);
        assert_eq!(config.picker, PickerConfig::default());
    }
}
