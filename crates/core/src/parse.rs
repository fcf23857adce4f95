//! Tolerant parsing of generation API output
//!
//! Models do not reliably return bare JSON even when asked to. The parsing
//! policy degrades in two steps: parse the whole text, else extract the
//! first `[...]` substring and parse that, else treat the response as
//! empty. A malformed response is a visible `Empty` outcome, never an
//! error.

use crate::types::PlaceSeed;
use regex::Regex;

/// Outcome of parsing a model response into place seeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// A JSON array of `{ name, description }` objects was found
    Parsed(Vec<PlaceSeed>),
    /// No parseable array in the response
    Empty,
}

impl ParseOutcome {
    /// Unwrap into a possibly empty seed list
    pub fn into_seeds(self) -> Vec<PlaceSeed> {
        match self {
            Self::Parsed(seeds) => seeds,
            Self::Empty => Vec::new(),
        }
    }
}

/// Parse a model response into place seeds
pub fn parse_place_seeds(text: &str) -> ParseOutcome {
    // First attempt: the entire response is the array we asked for
    if let Ok(seeds) = serde_json::from_str::<Vec<PlaceSeed>>(text) {
        return ParseOutcome::Parsed(seeds);
    }

    // Fallback: the array is embedded in surrounding prose or a code fence
    tracing::debug!("Direct JSON parse failed, extracting bracketed substring");
    match extract_json_array(text) {
        Some(candidate) => match serde_json::from_str::<Vec<PlaceSeed>>(&candidate) {
            Ok(seeds) => ParseOutcome::Parsed(seeds),
            Err(e) => {
                tracing::warn!("Extracted array did not parse: {}", e);
                ParseOutcome::Empty
            }
        },
        None => {
            tracing::warn!("Model response contained no JSON array");
            ParseOutcome::Empty
        }
    }
}

/// Extract the first `[...]` substring, spanning newlines.
///
/// Greedy match to the last closing bracket, mirroring how nested arrays
/// inside the objects would otherwise truncate the capture.
fn extract_json_array(text: &str) -> Option<String> {
    let re = Regex::new(r"(?s)\[.*\]").unwrap();
    re.find(text).map(|m| m.as_str().to_string())
}
