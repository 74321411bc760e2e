use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Client-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// REST API root, without a trailing slash
    pub api_base_url: String,
    pub locale: Locale,
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
    pub moderation_page_size: u32,
    pub toast_duration_ms: u32,
    /// Author lookups start once the typed name has this many characters
    pub author_lookup_min_chars: usize,
    pub author_lookup_debounce_ms: u32,
    pub country_suggestion_limit: usize,
    /// `log` level name: error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/quoteapi".to_string(),
            locale: Locale::Pl,
            default_page_size: 20,
            page_size_options: vec![10, 20, 50],
            moderation_page_size: 20,
            toast_duration_ms: 3000,
            author_lookup_min_chars: 2,
            author_lookup_debounce_ms: 300,
            country_suggestion_limit: 10,
            log_level: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Parse a JSON override; fields not present keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: CatalogConfig = serde_json::from_str(json)?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
