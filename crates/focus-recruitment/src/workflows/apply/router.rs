use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use crate::catalog::{CatalogError, ListingId};

use super::domain::ApplicationDraft;
use super::log::ApplicationLog;
use super::service::{ApplicationService, ApplicationServiceError};
use super::workflow::ApplicationError;

pub fn application_router<L>(service: Arc<ApplicationService<L>>) -> Router
where
    L: ApplicationLog + 'static,
{
    Router::new()
        .route(
            "/api/v1/jobs/:listing_id/applications",
            post(apply_handler::<L>),
        )
        .with_state(service)
}

pub(crate) async fn apply_handler<L>(
    State(service): State<Arc<ApplicationService<L>>>,
    Path(listing_id): Path<u32>,
    payload: Result<Json<ApplicationDraft>, JsonRejection>,
) -> Response
where
    L: ApplicationLog + 'static,
{
    let Json(draft) = match payload {
        Ok(draft) => draft,
        Err(rejection) => {
            let payload = json!({ "error": rejection.body_text() });
            return (rejection.status(), Json(payload)).into_response();
        }
    };
    match service.apply(ListingId(listing_id), draft) {
        Ok(receipt) => (StatusCode::ACCEPTED, Json(receipt)).into_response(),
        Err(ApplicationServiceError::Catalog(CatalogError::UnknownListing(id))) => {
            let payload = json!({ "error": format!("listing {id} does not exist") });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(ApplicationServiceError::Application(ApplicationError::Rejected { missing })) => {
            let payload = json!({
                "error": "missing required fields",
                "missing": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(ApplicationServiceError::Application(err @ ApplicationError::UnsupportedCv { .. })) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
