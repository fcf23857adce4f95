//! Gemini client implementation for Wayfare infrastructure

use serde::{Deserialize, Serialize};
use std::time::Duration;
use wayfare_core::{GeminiSettings, Result, WayfareError};

/// Gemini client configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: String::new(),
            model: "gemini-1.5-flash".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl From<GeminiSettings> for GeminiConfig {
    fn from(settings: GeminiSettings) -> Self {
        let timeout = settings.timeout();
        Self {
            base_url: settings.base_url,
            api_key: settings.api_key,
            model: settings.model,
            timeout,
        }
    }
}

/// Client for the Gemini generateContent API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(config: GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap();

        Self { config, client }
    }

    /// Generate text from a single prompt.
    ///
    /// Returns the first candidate's text, or an empty string when the
    /// response carries no candidates. Transport failures and non-success
    /// statuses propagate as errors; an unexpected body shape does not.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        tracing::debug!("Sending generateContent request to model {}", self.config.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| WayfareError::network(format!("Failed to reach Gemini API: {}", e)))?;

        if !response.status().is_success() {
            return Err(WayfareError::ai(format!(
                "Gemini API returned error: {}",
                response.status()
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| WayfareError::ai(format!("Failed to parse Gemini response: {}", e)))?;

        Ok(body.first_text().unwrap_or_default())
    }
}

/// generateContent request payload
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// generateContent response payload. All fields are optional so that an
/// unexpected shape degrades to "no text" instead of a parse error.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()
            .map(|p| p.text)
    }
}
