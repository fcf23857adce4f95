//! Configuration types for the Wayfare service
//!
//! All configuration is explicit and passed into the components that need
//! it. There is no process-wide mutable state; the prompt version tags are
//! the only compile-time constants, and bumping one is the sanctioned way
//! to invalidate previously cached responses.

use crate::{Result, WayfareError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Version tag baked into search cache keys. Bump to invalidate every
/// cached place list.
pub const SEARCH_PROMPT_VERSION: &str = "city-only-v1";

/// Version tag baked into details cache keys. Bump to invalidate every
/// cached place description.
pub const DETAILS_PROMPT_VERSION: &str = "tts-rich-v2";

/// Build the versioned cache key for a location's place list
pub fn search_cache_key(location: &str) -> String {
    format!("{}::{}", location.to_lowercase(), SEARCH_PROMPT_VERSION)
}

/// Build the versioned cache key for a location's place details.
/// The place name is the second half of the composite key and is stored
/// in its own column.
pub fn details_cache_key(location: &str) -> String {
    format!("{}::{}", location.to_lowercase(), DETAILS_PROMPT_VERSION)
}

/// Settings for the generative-language API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiSettings {
    /// Base URL of the generateContent endpoint family
    pub base_url: String,
    /// API key, passed as the `key` query parameter
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: String::new(),
            model: "gemini-1.5-flash".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl GeminiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Generation API settings
    pub gemini: GeminiSettings,
    /// Server bind host
    pub host: String,
    /// Server bind port
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            gemini: GeminiSettings::default(),
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database_url = url;
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            config.gemini.api_key = key;
        }
        if let Ok(host) = std::env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }

        config
    }

    /// Validate that required settings are present
    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            return Err(WayfareError::config("DATABASE_URL is not set"));
        }
        if self.gemini.api_key.trim().is_empty() {
            return Err(WayfareError::config("GEMINI_API_KEY is not set"));
        }
        Ok(())
    }
}
