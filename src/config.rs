//! Application Configuration
//!
//! Build-time settings with sensible local-development defaults.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const GROCERY_STORAGE_KEY: &str = "chompsmart_grocery_v1";
pub const SESSION_STORAGE_KEY: &str = "currentUserEmail";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL without trailing slash
    pub api_base_url: String,
    pub grocery_storage_key: String,
    pub session_storage_key: String,
    /// Delay before a typed food query is sent
    pub search_debounce_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            grocery_storage_key: GROCERY_STORAGE_KEY.to_string(),
            session_storage_key: SESSION_STORAGE_KEY.to_string(),
            search_debounce_ms: 250,
        }
    }
}

impl AppConfig {
    /// Defaults, with `CHOMPSMART_API_BASE` applied if it was set at build time
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("CHOMPSMART_API_BASE"))
    }

    fn with_api_base(api_base: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base_url = base.trim_end_matches('/').to_string();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::with_api_base(None);
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.grocery_storage_key, "chompsmart_grocery_v1");
    }

    #[test]
    fn test_override_strips_trailing_slash() {
        let config = AppConfig::with_api_base(Some(" https://api.example.com/ "));
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    fn test_blank_override_ignored() {
        let config = AppConfig::with_api_base(Some("   "));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
