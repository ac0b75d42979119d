use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use focus_recruitment::board::{board_router, BoardState};
use focus_recruitment::catalog::Catalog;
use focus_recruitment::site::{site_router, SiteContent, SiteState};
use focus_recruitment::workflows::apply::{application_router, ApplicationLog, ApplicationService};
use focus_recruitment::workflows::contact::{contact_router, EmailDispatcher};
use serde_json::json;
use std::sync::Arc;

/// Shared handles every router is built from.
pub(crate) struct AppServices<L, D> {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) content: Arc<SiteContent>,
    pub(crate) page_size: usize,
    pub(crate) applications: Arc<ApplicationService<L>>,
    pub(crate) dispatcher: Arc<D>,
}

pub(crate) fn with_site_routes<L, D>(services: AppServices<L, D>) -> Router
where
    L: ApplicationLog + 'static,
    D: EmailDispatcher + 'static,
{
    let board = board_router(BoardState {
        catalog: services.catalog.clone(),
        page_size: services.page_size,
    });
    let site = site_router(SiteState {
        content: services.content,
        catalog: services.catalog,
        page_size: services.page_size,
    });

    board
        .merge(application_router(services.applications))
        .merge(contact_router(services.dispatcher))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .merge(site)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
