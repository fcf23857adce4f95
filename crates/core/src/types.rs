//! Domain types for the Wayfare travel guide service

use serde::{Deserialize, Serialize};

/// A single attraction as parsed from the generation API, before image
/// enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceSeed {
    pub name: String,
    pub description: String,
}

/// A list-view attraction record: name, short description, and 1-3 image
/// URLs. Immutable once cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceSummary {
    pub name: String,
    pub description: String,
    /// Enriched image URLs, capped at 3. Placeholder substitution
    /// guarantees at least one entry.
    #[serde(default)]
    pub images: Vec<String>,
    /// First image URL, kept for clients that predate the `images` list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl PlaceSummary {
    /// Build a summary from a parsed seed and its enriched images
    pub fn from_seed(seed: PlaceSeed, images: Vec<String>) -> Self {
        let image = images.first().cloned();
        Self {
            name: seed.name,
            description: seed.description,
            images,
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seed_sets_primary_image() {
        let seed = PlaceSeed {
            name: "Red Fort".to_string(),
            description: "A grand Mughal fortress.".to_string(),
        };
        let summary = PlaceSummary::from_seed(
            seed,
            vec![
                "https://example.com/a.jpg".to_string(),
                "https://example.com/b.jpg".to_string(),
            ],
        );

        assert_eq!(summary.name, "Red Fort");
        assert_eq!(summary.images.len(), 2);
        assert_eq!(summary.image.as_deref(), Some("https://example.com/a.jpg"));
    }

    #[test]
    fn test_from_seed_without_images() {
        let seed = PlaceSeed {
            name: "Qutub Minar".to_string(),
            description: "A soaring victory tower.".to_string(),
        };
        let summary = PlaceSummary::from_seed(seed, vec![]);
        assert!(summary.images.is_empty());
        assert!(summary.image.is_none());
    }

    #[test]
    fn test_summary_deserializes_without_image_fields() {
        let json = r#"{"name": "India Gate", "description": "A war memorial."}"#;
        let summary: PlaceSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.name, "India Gate");
        assert!(summary.images.is_empty());
        assert!(summary.image.is_none());
    }

    #[test]
    fn test_summary_roundtrip_preserves_images() {
        let summary = PlaceSummary {
            name: "Lotus Temple".to_string(),
            description: "A flower-shaped house of worship.".to_string(),
            images: vec!["https://example.com/lotus.jpg".to_string()],
            image: Some("https://example.com/lotus.jpg".to_string()),
        };

        let json = serde_json::to_string(&summary).unwrap();
        let parsed: PlaceSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }
}
