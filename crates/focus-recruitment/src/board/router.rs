use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::catalog::{Catalog, CatalogError, JobListing, ListingId};

use super::filter::{filter_listings, FilterState};
use super::locations::{location_options, LocationOption};
use super::pagination::{PageView, Paginator};

/// Shared, read-only inputs for the board endpoints.
#[derive(Debug, Clone)]
pub struct BoardState {
    pub catalog: Arc<Catalog>,
    pub page_size: usize,
}

/// Query string accepted by the listing endpoint. Blank values count as "not selected".
#[derive(Debug, Default, Deserialize)]
pub struct JobBoardQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

impl JobBoardQuery {
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            search_query: self.search.clone().unwrap_or_default(),
            selected_category: non_blank(&self.category),
            selected_location: non_blank(&self.location),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .filter(|value| !value.trim().is_empty())
        .cloned()
}

#[derive(Debug, Serialize)]
pub struct JobBoardResponse {
    pub filters: FilterState,
    #[serde(flatten)]
    pub page: PageView<JobListing>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationQuery {
    #[serde(default)]
    pub query: String,
}

/// Compute one page of the board for a stateless request. Requested pages outside the
/// available range are clamped.
pub fn board_page(catalog: &Catalog, page_size: usize, query: &JobBoardQuery) -> JobBoardResponse {
    let filters = query.filter_state();
    let visible: Vec<JobListing> = filter_listings(catalog.listings(), &filters)
        .into_iter()
        .cloned()
        .collect();
    let paginator = Paginator::at_page(page_size, query.page.unwrap_or(1), visible.len());

    JobBoardResponse {
        filters,
        page: paginator.view(&visible),
    }
}

pub fn board_router(state: BoardState) -> Router {
    Router::new()
        .route("/api/v1/jobs", get(list_handler))
        .route("/api/v1/jobs/categories", get(categories_handler))
        .route("/api/v1/jobs/:listing_id", get(detail_handler))
        .route("/api/v1/locations", get(locations_handler))
        .with_state(state)
}

pub(crate) async fn list_handler(
    State(state): State<BoardState>,
    Query(query): Query<JobBoardQuery>,
) -> Json<JobBoardResponse> {
    Json(board_page(&state.catalog, state.page_size, &query))
}

pub(crate) async fn categories_handler(State(state): State<BoardState>) -> Json<Vec<String>> {
    Json(state.catalog.categories().to_vec())
}

pub(crate) async fn detail_handler(
    State(state): State<BoardState>,
    Path(listing_id): Path<u32>,
) -> Response {
    match state.catalog.get(ListingId(listing_id)) {
        Ok(listing) => (StatusCode::OK, Json(listing.clone())).into_response(),
        Err(CatalogError::UnknownListing(id)) => {
            let payload = json!({ "error": format!("listing {id} does not exist") });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn locations_handler(
    State(state): State<BoardState>,
    Query(query): Query<LocationQuery>,
) -> Json<Vec<LocationOption>> {
    Json(location_options(state.catalog.locations(), &query.query))
}
