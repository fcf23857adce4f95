//! Wayfare Core Library
//!
//! Core functionality for the Wayfare travel guide service: domain types,
//! configuration, prompt builders, and tolerant parsing of generation API
//! output. Outbound clients live in `wayfare-infra`; the HTTP surface in
//! `wayfare-serve`.

pub mod config;
pub mod error;
pub mod parse;
pub mod prompts;
pub mod types;

// Re-export commonly used types
pub use config::{
    details_cache_key, search_cache_key, AppConfig, GeminiSettings, DETAILS_PROMPT_VERSION,
    SEARCH_PROMPT_VERSION,
};
pub use error::{Result, WayfareError};
pub use parse::{parse_place_seeds, ParseOutcome};
pub use types::{PlaceSeed, PlaceSummary};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version information string
pub fn version_info() -> String {
    format!("wayfare-core v{}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        let info = version_info();
        assert!(info.starts_with("wayfare-core v"));
        assert!(info.contains(VERSION));
    }
}
