//! Frontend configuration.
//!
//! The defaults are embedded as TOML; `SUPPLIER_API_URL` set at build time
//! overrides the API base URL.

use serde::Deserialize;

use super::api_utils::api_base;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ApiConfig {
    /// Empty means "same host as the page, port 3000".
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_toast_timeout_ms")]
    pub toast_timeout_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_timeout_ms: default_toast_timeout_ms(),
        }
    }
}

fn default_toast_timeout_ms() -> u32 {
    3000
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[ui]
toast_timeout_ms = 3000
"#;

pub fn parse_config(source: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(source)
}

/// Load the embedded configuration and apply the build-time override.
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    let mut config = parse_config(DEFAULT_CONFIG)?;
    if let Some(url) = option_env!("SUPPLIER_API_URL") {
        log::info!("Using API URL from SUPPLIER_API_URL: {}", url);
        config.api.base_url = url.to_string();
    }
    Ok(config)
}

impl ApiConfig {
    /// Base URL without a trailing slash.
    pub fn resolve_base_url(&self) -> String {
        let configured = self.base_url.trim().trim_end_matches('/');
        if configured.is_empty() {
            api_base()
        } else {
            configured.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.ui.toast_timeout_ms, 3000);
    }

    #[test]
    fn test_ui_section_is_optional() {
        let config = parse_config("[api]\nbase_url = \"https://api.example.com\"\n").unwrap();
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_configured_base_url_is_trimmed() {
        let api = ApiConfig {
            base_url: " https://api.example.com/ ".to_string(),
        };
        assert_eq!(api.resolve_base_url(), "https://api.example.com");
    }
}
