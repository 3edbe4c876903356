use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::error::{AppError, AppResult};
use crate::services::{list_genres, list_types, sample_one, FacetQuery, SampleQuery};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct GenresParams {
    #[serde(rename = "type", default)]
    pub media_type: String,
}

#[derive(Debug, Serialize)]
pub struct TypeList {
    pub types: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GenreList {
    pub genres: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SampleRequest {
    #[serde(rename = "type", default)]
    pub media_type: String,
    #[serde(default)]
    pub genre: String,
    /// Defaults to 0 when the client omits a threshold
    #[serde(default)]
    pub min_score: f64,
}

#[derive(Debug, Serialize)]
pub struct SampleResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
}

impl SampleResponse {
    fn found(item: Item) -> Self {
        Self {
            found: true,
            item: Some(item),
        }
    }

    fn not_found() -> Self {
        Self {
            found: false,
            item: None,
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// List all media types present in the catalog
pub async fn get_types(State(state): State<AppState>) -> Json<TypeList> {
    let types = list_types(&state.catalog);
    Json(TypeList { types })
}

/// List the genres available for one media type
pub async fn get_genres(
    State(state): State<AppState>,
    Query(params): Query<GenresParams>,
) -> AppResult<Json<GenreList>> {
    let query = FacetQuery::new(params.media_type)?;
    let genres = list_genres(&state.catalog, &query);
    Ok(Json(GenreList { genres }))
}

/// Draw one random item matching the submitted criteria.
///
/// An empty result is a success-shaped `{"found": false}`, not an error.
pub async fn sample(
    State(state): State<AppState>,
    Json(request): Json<SampleRequest>,
) -> AppResult<Json<SampleResponse>> {
    let query = SampleQuery::new(request.media_type, request.genre, request.min_score)?;

    let mut rng = state
        .rng
        .lock()
        .map_err(|_| AppError::Internal("rng lock poisoned".to_string()))?;

    let response = match sample_one(&state.catalog, &query, &mut *rng) {
        Some(item) => SampleResponse::found(item.clone()),
        None => SampleResponse::not_found(),
    };
    Ok(Json(response))
}
