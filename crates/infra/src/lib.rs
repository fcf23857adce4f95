//! Wayfare Infrastructure Library
//!
//! Outbound clients for the Wayfare travel guide service: the Gemini
//! generation client, the best-effort image finder, the combined guide
//! client, and the tracing logger bootstrap.

pub mod gemini;
pub mod guide;
pub mod images;
pub mod logger;

pub use gemini::{GeminiClient, GeminiConfig};
pub use guide::GuideClient;
pub use images::{ImageFinder, ImageSourceConfig};
pub use logger::{init_default_logger, init_logger, init_test_logger, LoggerConfig};

use wayfare_core::AppConfig;

/// Infrastructure version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a guide client from application configuration
pub fn guide_client_from_config(config: &AppConfig) -> GuideClient {
    let gemini = GeminiClient::new(GeminiConfig::from(config.gemini.clone()));
    let images = ImageFinder::default();
    GuideClient::new(gemini, images)
}
