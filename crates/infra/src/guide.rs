//! Combined travel guide client
//!
//! Wires the generation client and the image finder into the two
//! operations the handlers need: an enriched attraction list and a
//! long-form spoken-style description.

use crate::gemini::GeminiClient;
use crate::images::ImageFinder;
use wayfare_core::{parse_place_seeds, prompts, PlaceSummary, Result};

/// Travel guide generation client
#[derive(Debug, Clone)]
pub struct GuideClient {
    gemini: GeminiClient,
    images: ImageFinder,
}

impl GuideClient {
    /// Create a guide client from its two collaborators
    pub fn new(gemini: GeminiClient, images: ImageFinder) -> Self {
        Self { gemini, images }
    }

    /// Generate the attraction list for a location and enrich each entry
    /// with images.
    ///
    /// A malformed model response degrades to an empty list; an upstream
    /// network or API failure propagates to the caller. Enrichment runs
    /// one entry at a time.
    pub async fn list_places(&self, location: &str) -> Result<Vec<PlaceSummary>> {
        let text = self.gemini.generate(&prompts::search_prompt(location)).await?;

        let seeds = parse_place_seeds(&text).into_seeds();
        tracing::info!("Generated {} places for {}", seeds.len(), location);

        let mut places = Vec::with_capacity(seeds.len());
        for seed in seeds {
            let images = self.images.find_images(&seed.name, location).await;
            places.push(PlaceSummary::from_seed(seed, images));
        }

        Ok(places)
    }

    /// Generate the long-form description for a named place, returned
    /// verbatim. Empty when the upstream response shape is unexpected.
    pub async fn describe_place(&self, location: &str, name: &str) -> Result<String> {
        self.gemini
            .generate(&prompts::details_prompt(location, name))
            .await
    }
}
