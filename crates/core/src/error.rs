//! Error handling for Wayfare core library

use thiserror::Error;

/// Result type alias for Wayfare operations
pub type Result<T> = std::result::Result<T, WayfareError>;

/// Main error type for Wayfare operations
#[derive(Error, Debug)]
pub enum WayfareError {
    /// IO-related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Generic errors
    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),

    /// Generation API errors
    #[error("AI service error: {message}")]
    AiService { message: String },

    /// Database errors
    #[error("Database error: {message}")]
    Database { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Network connectivity errors
    #[error("Network error: {message}")]
    Network { message: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl WayfareError {
    /// Create an AI service error
    pub fn ai<S: Into<String>>(message: S) -> Self {
        Self::AiService {
            message: message.into(),
        }
    }

    /// Create a database error
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether this error is the caller's fault (maps to HTTP 400)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Message suitable for the `error` field of an HTTP response
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = WayfareError::ai("model unreachable");
        assert!(matches!(err, WayfareError::AiService { .. }));
        assert_eq!(err.to_string(), "AI service error: model unreachable");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(WayfareError::validation("Location required").is_client_error());
        assert!(!WayfareError::network("connection refused").is_client_error());
        assert!(!WayfareError::database("pool timeout").is_client_error());
    }

    #[test]
    fn test_client_message() {
        let err = WayfareError::validation("Location required");
        assert_eq!(err.client_message(), "Location required");

        let err = WayfareError::database("connection refused");
        assert_eq!(err.client_message(), "Database error: connection refused");
    }

    #[test]
    fn test_error_from_conversions() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WayfareError = io_err.into();
        assert!(matches!(err, WayfareError::Io(_)));

        let json_err = serde_json::from_str::<i32>("invalid json").unwrap_err();
        let err: WayfareError = json_err.into();
        assert!(matches!(err, WayfareError::Json(_)));
    }
}
