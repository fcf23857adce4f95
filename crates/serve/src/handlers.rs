//! HTTP handlers for the Wayfare serve crate

use crate::store::PlaceStore;
use crate::ServerConfig;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use wayfare_core::{details_cache_key, search_cache_key, PlaceSummary, WayfareError};
use wayfare_infra::GuideClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: PlaceStore,
    pub guide: GuideClient,
    pub config: ServerConfig,
}

impl AppState {
    /// Create new application state with a database connection
    pub async fn new(config: ServerConfig) -> wayfare_core::Result<Self> {
        let store = PlaceStore::connect(&config.database_url).await?;
        let guide = wayfare_infra::guide_client_from_config(&config.app_config());

        Ok(Self {
            store,
            guide,
            config,
        })
    }

    /// Create application state from existing parts (for testing)
    pub fn from_parts(config: ServerConfig, store: PlaceStore, guide: GuideClient) -> Self {
        Self {
            store,
            guide,
            config,
        }
    }
}

/// Handler for the service descriptor at `/`
pub async fn handle_root() -> impl IntoResponse {
    Json(ServiceDescriptor {
        message: "Wayfare travel guide API is running!".to_string(),
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
        endpoints: vec![
            "POST /api/search - Search for places in a city".to_string(),
            "POST /api/details - Get detailed information about a place".to_string(),
            "GET /api/ping - Database health check".to_string(),
        ],
    })
}

/// Handler for the database connectivity probe
pub async fn handle_ping(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(time) => (
            StatusCode::OK,
            Json(PingResponse {
                status: "ok".to_string(),
                time,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Ping failed: {}", e);
            error_response(e)
        }
    }
}

/// Handler for `POST /api/search`
pub async fn handle_search(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> impl IntoResponse {
    let location = payload.location.unwrap_or_default();
    let location = location.trim();

    if location.is_empty() {
        return error_response(WayfareError::validation("Location required"));
    }

    tracing::info!("Search request for location: {}", location);
    let key = search_cache_key(location);

    match state
        .store
        .places_cache_aside(&key, || state.guide.list_places(location))
        .await
    {
        Ok(cached) => (
            StatusCode::OK,
            Json(SearchResponse {
                from_cache: cached.from_cache,
                places: cached.value,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Search failed for {}: {}", location, e);
            error_response(e)
        }
    }
}

/// Handler for `POST /api/details`
pub async fn handle_details(
    State(state): State<AppState>,
    Json(payload): Json<DetailsRequest>,
) -> impl IntoResponse {
    let location = payload.location.unwrap_or_default();
    let location = location.trim();
    let name = payload.name.unwrap_or_default();
    let name = name.trim();

    if location.is_empty() || name.is_empty() {
        return error_response(WayfareError::validation("Location and name required"));
    }

    tracing::info!("Details request for {} in {}", name, location);
    let key = details_cache_key(location);

    match state
        .store
        .details_cache_aside(&key, name, || state.guide.describe_place(location, name))
        .await
    {
        Ok(cached) => (
            StatusCode::OK,
            Json(DetailsResponse {
                from_cache: cached.from_cache,
                details: cached.value,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Details failed for {} in {}: {}", name, location, e);
            error_response(e)
        }
    }
}

/// Map an error to its HTTP response: validation errors are the caller's
/// fault (400), everything else is a server failure (500). The body is a
/// single free-text message field either way.
fn error_response(e: WayfareError) -> axum::response::Response {
    let status = if e.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (
        status,
        Json(ErrorResponse {
            error: e.client_message(),
        }),
    )
        .into_response()
}

// Request types

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetailsRequest {
    pub location: Option<String>,
    pub name: Option<String>,
}

// Response types

#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub message: String,
    pub status: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: String,
    pub time: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    #[serde(rename = "fromCache")]
    pub from_cache: bool,
    pub places: Vec<PlaceSummary>,
}

#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    #[serde(rename = "fromCache")]
    pub from_cache: bool,
    pub details: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_tolerates_missing_location() {
        let request: SearchRequest = serde_json::from_str("{}").unwrap();
        assert!(request.location.is_none());

        let request: SearchRequest = serde_json::from_str(r#"{"location": "Paris"}"#).unwrap();
        assert_eq!(request.location.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_details_request_tolerates_missing_fields() {
        let request: DetailsRequest = serde_json::from_str(r#"{"location": "Paris"}"#).unwrap();
        assert_eq!(request.location.as_deref(), Some("Paris"));
        assert!(request.name.is_none());
    }

    #[test]
    fn test_search_response_field_casing() {
        let response = SearchResponse {
            from_cache: true,
            places: vec![],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["fromCache"], true);
        assert!(json["places"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_details_response_field_casing() {
        let response = DetailsResponse {
            from_cache: false,
            details: "A long guide.".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""fromCache":false"#));
        assert!(json.contains(r#""details":"A long guide.""#));
    }

    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_string(&ErrorResponse {
            error: "Location required".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"error":"Location required"}"#);
    }
}
