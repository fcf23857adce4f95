//! Wayfare Serve Library
//!
//! HTTP surface for the Wayfare travel guide service.

pub mod api;
pub mod handlers;
pub mod server;
pub mod store;

pub use handlers::AppState;
pub use server::{ServerBuilder, WayfareServer};
pub use store::{Cached, PlaceStore};

use wayfare_core::{AppConfig, GeminiSettings};

/// Server version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub gemini: GeminiSettings,
    pub cors_enabled: bool,
    pub max_request_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            database_url: String::new(),
            gemini: GeminiSettings::default(),
            cors_enabled: true,
            max_request_size: 1024 * 1024, // 1MB, request bodies are tiny
        }
    }
}

impl ServerConfig {
    /// Build a server configuration from application configuration
    pub fn from_app_config(config: AppConfig) -> Self {
        Self {
            host: config.host,
            port: config.port,
            database_url: config.database_url,
            gemini: config.gemini,
            ..Default::default()
        }
    }

    /// Project back into application configuration for components that
    /// take it
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            database_url: self.database_url.clone(),
            gemini: self.gemini.clone(),
            host: self.host.clone(),
            port: self.port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(config.cors_enabled);
    }

    #[test]
    fn test_from_app_config_roundtrip() {
        let mut app_config = AppConfig::default();
        app_config.database_url = "postgresql://localhost/wayfare".to_string();
        app_config.gemini.api_key = "test-key".to_string();
        app_config.port = 8080;

        let server_config = ServerConfig::from_app_config(app_config.clone());
        assert_eq!(server_config.port, 8080);
        assert_eq!(server_config.app_config().database_url, app_config.database_url);
        assert_eq!(server_config.app_config().gemini.api_key, "test-key");
    }
}
