use crate::{ProxyPoolError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyPoolConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
}

impl ProxyPoolConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn validate(&self) -> Result<()> {
        if self.table.page_size == 0 {
            return Err(ProxyPoolError::Config("table.page_size must be at least 1".to_string()));
        }
        if self.table.page_size_options.contains(&0) {
            return Err(ProxyPoolError::Config(
                "table.page_size_options must not contain 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub list_path: String,
    pub one_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            list_path: "/proxies".to_string(),
            one_path: "/proxies/one".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Newest detections first after loading
    pub sort_by_detected_at: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_size_options: vec![10, 20, 50, 100],
            sort_by_detected_at: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    pub duration_ms: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self { duration_ms: 3000 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ProxyPoolConfig::from_json_str(r#"{"table":{"page_size":20}}"#).unwrap();
        assert_eq!(config.table.page_size, 20);
        assert_eq!(config.table.page_size_options, vec![10, 20, 50, 100]);
        assert!(config.table.sort_by_detected_at);
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.notify.duration_ms, 3000);

        let api = ProxyPoolConfig::from_json_str(r#"{"api":{"one_path":"/v2/proxies/one"}}"#).unwrap();
        assert_eq!(api.api.list_path, "/proxies");
        assert_eq!(api.api.one_path, "/v2/proxies/one");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = ProxyPoolConfig::from_json_str(r#"{"table":{"page_size":0}}"#).unwrap_err();
        assert!(matches!(err, ProxyPoolError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ProxyPoolConfig::load("/nonexistent/proxypool.json").unwrap_err();
        assert!(matches!(err, ProxyPoolError::Io(_)));
    }
}
