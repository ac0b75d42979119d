use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use crate::board::{board_page, JobBoardQuery, JobBoardResponse};
use crate::catalog::Catalog;

use super::content::{
    AboutContent, ContactContent, HomeContent, ServicesContent, SiteContent, WhyChooseUsContent,
};
use super::pages::{NavLink, SitePage};

#[derive(Debug, Clone)]
pub struct SiteState {
    pub content: Arc<SiteContent>,
    pub catalog: Arc<Catalog>,
    pub page_size: usize,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageBody {
    Jobs {
        hero: HomeContent,
        board: JobBoardResponse,
    },
    About(AboutContent),
    WhyChooseUs(WhyChooseUsContent),
    Services(ServicesContent),
    Contact(ContactContent),
}

/// Everything a client needs to render one page.
#[derive(Debug, Serialize)]
pub struct PageDocument {
    pub page: SitePage,
    pub path: &'static str,
    pub title: &'static str,
    pub navigation: Vec<NavLink>,
    pub body: PageBody,
}

/// The jobs page always starts unfiltered on page one; filters live in the board API.
pub fn page_document(state: &SiteState, page: SitePage) -> PageDocument {
    let content = &state.content;
    let body = match page {
        SitePage::Jobs => PageBody::Jobs {
            hero: content.home.clone(),
            board: board_page(&state.catalog, state.page_size, &JobBoardQuery::default()),
        },
        SitePage::About => PageBody::About(content.about.clone()),
        SitePage::WhyChooseUs => PageBody::WhyChooseUs(content.why_choose_us.clone()),
        SitePage::Services => PageBody::Services(content.services.clone()),
        SitePage::Contact => PageBody::Contact(content.contact.clone()),
    };

    PageDocument {
        page,
        path: page.path(),
        title: page.title(),
        navigation: SitePage::navigation(),
        body,
    }
}

/// Page routes plus the JSON 404 fallback. Merge this router last.
pub fn site_router(state: SiteState) -> Router {
    SitePage::ALL
        .into_iter()
        .fold(Router::new(), |router, page| {
            router.route(page.path(), page_route(page))
        })
        .fallback(fallback_handler)
        .with_state(state)
}

fn page_route(page: SitePage) -> MethodRouter<SiteState> {
    get(move |State(state): State<SiteState>| async move { render_page(&state, page) })
}

fn render_page(state: &SiteState, page: SitePage) -> Response {
    (StatusCode::OK, Json(page_document(state, page))).into_response()
}

/// Unrouted requests. A page path with trailing slashes still resolves for GET.
pub(crate) async fn fallback_handler(
    State(state): State<SiteState>,
    method: Method,
    uri: Uri,
) -> Response {
    match SitePage::from_path(uri.path()) {
        Some(page) if method == Method::GET => render_page(&state, page),
        _ => not_found(uri.path()),
    }
}

fn not_found(path: &str) -> Response {
    let payload = json!({
        "error": format!("no page at {path}"),
        "navigation": SitePage::navigation(),
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn state() -> SiteState {
        SiteState {
            content: Arc::new(SiteContent::embedded().expect("embedded content is valid")),
            catalog: Arc::new(Catalog::embedded().expect("embedded catalog is valid")),
            page_size: 9,
        }
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        send(Request::get(uri).body(Body::empty()).expect("request builds")).await
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = site_router(state())
            .oneshot(request)
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn home_embeds_first_board_page() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"], "jobs");
        assert_eq!(body["body"]["kind"], "jobs");
        assert_eq!(body["body"]["board"]["page"], 1);
        assert_eq!(body["body"]["board"]["total_results"], 70);
        assert_eq!(
            body["body"]["board"]["items"].as_array().expect("items").len(),
            9
        );
        assert_eq!(body["navigation"][0]["label"], "About Us");
    }

    #[tokio::test]
    async fn static_pages_render_their_content() {
        let (status, body) = get_json("/why-choose-us").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Why Choose Us");
        assert_eq!(body["body"]["benefits"].as_array().expect("benefits").len(), 6);

        let (_, body) = get_json("/contact").await;
        assert_eq!(body["body"]["email"], "info@focusrecruitment.co.uk");
    }

    #[tokio::test]
    async fn trailing_slash_resolves_to_the_page() {
        let (status, body) = get_json("/services/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"], "services");
        assert_eq!(body["path"], "/services");

        let request = Request::post("/services/")
            .body(Body::empty())
            .expect("request builds");
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_path_is_json_not_found() {
        let (status, body) = get_json("/careers").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().expect("error").contains("/careers"));
    }
}
