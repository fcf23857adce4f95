//! Image lookup for place enrichment
//!
//! Two public sources are tried in order: the Wikipedia REST summary
//! endpoint (0 or 1 image) and Unsplash Source keyword search (up to 2).
//! Every per-source, per-variation failure is swallowed; a place with no
//! hits from either source gets exactly one placeholder URL, so the
//! result always holds between 1 and 3 entries.

use regex::Regex;
use std::time::Duration;
use url::Url;

/// Maximum images attached to a place
const MAX_IMAGES: usize = 3;

/// Maximum images accepted from Unsplash
const MAX_UNSPLASH_IMAGES: usize = 2;

/// Category words stripped from titles when probing Wikipedia
const CATEGORY_WORDS: &str = r"(?i)\b(Fort|Palace|Temple|Museum|Garden|Market)\b";

/// Image source configuration
#[derive(Debug, Clone)]
pub struct ImageSourceConfig {
    /// Wikipedia REST API base (up to and including `/api/rest_v1`)
    pub wikipedia_base_url: String,
    /// Unsplash Source base URL
    pub unsplash_base_url: String,
    /// Placeholder image service base URL
    pub placeholder_base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ImageSourceConfig {
    fn default() -> Self {
        Self {
            wikipedia_base_url: "https://en.wikipedia.org/api/rest_v1".to_string(),
            unsplash_base_url: "https://source.unsplash.com".to_string(),
            placeholder_base_url: "https://via.placeholder.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Best-effort image lookup across the configured sources
#[derive(Debug, Clone)]
pub struct ImageFinder {
    config: ImageSourceConfig,
    client: reqwest::Client,
}

impl Default for ImageFinder {
    fn default() -> Self {
        Self::new(ImageSourceConfig::default())
    }
}

impl ImageFinder {
    /// Create a new image finder
    pub fn new(config: ImageSourceConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap();

        Self { config, client }
    }

    /// Collect up to 3 image URLs for a place, never fewer than 1.
    ///
    /// Sources are tried sequentially: Wikipedia first, then Unsplash.
    /// The placeholder substitution is the only path that runs when both
    /// sources come up empty.
    pub async fn find_images(&self, name: &str, location: &str) -> Vec<String> {
        let mut images = Vec::new();

        if let Some(url) = self.wikipedia_image(name).await {
            tracing::debug!("Wikipedia image found for {}", name);
            images.push(url);
        }

        images.extend(self.unsplash_images(name, location).await);
        images.truncate(MAX_IMAGES);

        if images.is_empty() {
            tracing::debug!("No images found for {}, using placeholder", name);
            images.push(self.placeholder_image(name));
        }

        images
    }

    /// Probe Wikipedia summaries with title variations, returning the
    /// first upscaled thumbnail URL found
    pub async fn wikipedia_image(&self, title: &str) -> Option<String> {
        for variation in title_variations(title) {
            match self.wikipedia_thumbnail(&variation).await {
                Some(thumbnail) => return Some(upscale_thumbnail(&thumbnail)),
                None => {
                    tracing::debug!("No Wikipedia thumbnail for variation '{}'", variation);
                }
            }
        }
        None
    }

    /// Fetch the summary for one exact title, yielding its thumbnail URL
    async fn wikipedia_thumbnail(&self, title: &str) -> Option<String> {
        let mut url = Url::parse(&self.config.wikipedia_base_url).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(["page", "summary", title]);

        let response = self.client.get(url).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }

        let summary: WikipediaSummary = response.json().await.ok()?;
        summary.thumbnail.map(|t| t.source)
    }

    /// Query Unsplash Source with up to four keyword variations, keeping
    /// URLs whose HEAD probe succeeds. Stops after 2 hits.
    pub async fn unsplash_images(&self, name: &str, location: &str) -> Vec<String> {
        let mut images = Vec::new();

        for query in search_queries(name, location) {
            if images.len() >= MAX_UNSPLASH_IMAGES {
                break;
            }

            match self.unsplash_probe(&query).await {
                Some(url) => {
                    tracing::debug!("Unsplash image found for query '{}'", query);
                    images.push(url);
                }
                None => {
                    tracing::debug!("Unsplash query failed: '{}'", query);
                }
            }
        }

        images
    }

    /// HEAD-probe one Unsplash Source URL, returning it when the probe
    /// reports success
    async fn unsplash_probe(&self, query: &str) -> Option<String> {
        let mut url = Url::parse(&self.config.unsplash_base_url).ok()?;
        url.set_path("/400x300/");
        url.set_query(Some(query));

        let response = self.client.head(url.clone()).send().await.ok()?;
        if response.status().is_success() {
            Some(url.to_string())
        } else {
            None
        }
    }

    /// Placeholder image parameterized by the place name
    fn placeholder_image(&self, name: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();
        format!(
            "{}/400x300/6366f1/ffffff?text={}",
            self.config.placeholder_base_url, encoded
        )
    }
}

/// Wikipedia summary response, reduced to the one field we read
#[derive(Debug, serde::Deserialize)]
struct WikipediaSummary {
    thumbnail: Option<WikipediaThumbnail>,
}

#[derive(Debug, serde::Deserialize)]
struct WikipediaThumbnail {
    source: String,
}

/// Textual variations of a title to probe against Wikipedia, in order:
/// raw, whitespace-to-underscore, text before a comma, and the title with
/// common category words stripped. Duplicates and empties are dropped.
fn title_variations(title: &str) -> Vec<String> {
    let stripped = Regex::new(CATEGORY_WORDS)
        .unwrap()
        .replace_all(title, "")
        .trim()
        .to_string();

    let candidates = [
        title.to_string(),
        title.split_whitespace().collect::<Vec<_>>().join("_"),
        title.split(',').next().unwrap_or(title).trim().to_string(),
        stripped,
    ];

    let mut variations = Vec::new();
    for candidate in candidates {
        if !candidate.is_empty() && !variations.contains(&candidate) {
            variations.push(candidate);
        }
    }
    variations
}

/// Rewrite the resolution token in a Wikipedia thumbnail URL to 400px
fn upscale_thumbnail(url: &str) -> String {
    Regex::new(r"/\d+px-")
        .unwrap()
        .replace(url, "/400px-")
        .to_string()
}

/// Keyword queries tried against Unsplash, most specific first
fn search_queries(name: &str, location: &str) -> [String; 4] {
    [
        format!("{} {}", name, location),
        name.to_string(),
        format!("{} tourism", location),
        format!("{} architecture", name),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder_for(server: &mockito::Server) -> ImageFinder {
        ImageFinder::new(ImageSourceConfig {
            wikipedia_base_url: server.url(),
            unsplash_base_url: server.url(),
            placeholder_base_url: "https://via.placeholder.com".to_string(),
            timeout: Duration::from_secs(5),
        })
    }

    #[test]
    fn test_title_variations_order() {
        let variations = title_variations("Red Fort, Delhi");
        assert_eq!(
            variations,
            vec![
                "Red Fort, Delhi".to_string(),
                "Red_Fort,_Delhi".to_string(),
                "Red Fort".to_string(),
                "Red , Delhi".to_string(),
            ]
        );
    }

    #[test]
    fn test_title_variations_dedup() {
        // A single word produces identical raw and underscore forms
        let variations = title_variations("Colosseum");
        assert_eq!(variations, vec!["Colosseum".to_string()]);
    }

    #[test]
    fn test_title_variations_strip_category_words() {
        let variations = title_variations("Amber Fort");
        assert!(variations.contains(&"Amber".to_string()));
    }

    #[test]
    fn test_upscale_thumbnail() {
        let url = "https://upload.wikimedia.org/wikipedia/commons/thumb/a/ab/X.jpg/320px-X.jpg";
        let upscaled = upscale_thumbnail(url);
        assert!(upscaled.contains("/400px-X.jpg"));
        assert!(!upscaled.contains("320px"));
    }

    #[test]
    fn test_upscale_leaves_unrecognized_urls_alone() {
        let url = "https://example.com/image.jpg";
        assert_eq!(upscale_thumbnail(url), url);
    }

    #[test]
    fn test_search_queries() {
        let queries = search_queries("Louvre", "Paris");
        assert_eq!(queries[0], "Louvre Paris");
        assert_eq!(queries[1], "Louvre");
        assert_eq!(queries[2], "Paris tourism");
        assert_eq!(queries[3], "Louvre architecture");
    }

    #[tokio::test]
    async fn test_wikipedia_image_upscales_thumbnail() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/page/summary/Colosseum")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"thumbnail": {"source": "https://upload.wikimedia.org/thumb/200px-C.jpg"}}"#,
            )
            .create_async()
            .await;

        let finder = finder_for(&server);
        let image = finder.wikipedia_image("Colosseum").await;
        assert_eq!(
            image,
            Some("https://upload.wikimedia.org/thumb/400px-C.jpg".to_string())
        );
    }

    #[tokio::test]
    async fn test_wikipedia_miss_is_none() {
        let server = mockito::Server::new_async().await;
        // No mocks registered: every variation fails and is swallowed
        let finder = finder_for(&server);
        assert_eq!(finder.wikipedia_image("Colosseum").await, None);
    }

    #[tokio::test]
    async fn test_unsplash_accepts_head_success() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("HEAD", "/400x300/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .expect_at_least(1)
            .create_async()
            .await;

        let finder = finder_for(&server);
        let images = finder.unsplash_images("Louvre", "Paris").await;
        // Every probe succeeds, so collection stops at the cap
        assert_eq!(images.len(), 2);
        assert!(images[0].contains("/400x300/"));
    }

    #[tokio::test]
    async fn test_find_images_falls_back_to_placeholder() {
        let server = mockito::Server::new_async().await;
        // No mocks: both sources fail for every variation
        let finder = finder_for(&server);
        let images = finder.find_images("Red Fort", "Delhi").await;
        assert_eq!(images.len(), 1);
        assert!(images[0].starts_with("https://via.placeholder.com/400x300/6366f1/ffffff?text="));
        assert!(images[0].contains("Red"));
    }

    #[tokio::test]
    async fn test_find_images_caps_at_three() {
        let mut server = mockito::Server::new_async().await;
        let _wiki = server
            .mock("GET", "/page/summary/Colosseum")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"thumbnail": {"source": "https://upload.wikimedia.org/100px-C.jpg"}}"#)
            .create_async()
            .await;
        let _unsplash = server
            .mock("HEAD", "/400x300/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .expect_at_least(1)
            .create_async()
            .await;

        let finder = finder_for(&server);
        let images = finder.find_images("Colosseum", "Rome").await;
        assert_eq!(images.len(), 3);
    }
}
