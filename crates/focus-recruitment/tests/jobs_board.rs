//! Board behaviour exercised through the public session and router, against the embedded
//! listing catalog.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use focus_recruitment::board::{
    board_router, BoardState, JobBoardSession, LocationOption, ScrollRequest, PAGE_SIZE,
};
use focus_recruitment::catalog::Catalog;

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::embedded().expect("embedded catalog is valid"))
}

fn session() -> JobBoardSession {
    JobBoardSession::new(catalog(), PAGE_SIZE)
}

fn titles(session: &JobBoardSession) -> Vec<String> {
    session
        .visible()
        .into_iter()
        .map(|listing| listing.title.clone())
        .collect()
}

#[test]
fn unfiltered_board_pages_through_every_listing() {
    let mut session = session();
    let mut seen = 0;
    loop {
        let page = session.page();
        assert!(page.items.len() <= PAGE_SIZE);
        seen += page.items.len();
        if session.next_page().is_none() {
            break;
        }
    }
    assert_eq!(seen, 70);
    assert_eq!(session.current_page(), 8);
    assert_eq!(session.page().items.len(), 7);
}

#[test]
fn search_matches_title_case_insensitively() {
    let mut session = session();
    session.set_search_query("accountant");
    assert_eq!(
        titles(&session),
        ["Senior Accountant (Remote)", "UK Accountant (Freelance)"]
    );
    assert!(!session.page().show_pagination);
}

#[test]
fn category_and_location_intersect() {
    let mut session = session();
    session.select_category(Some("Social Work".to_string()));
    assert_eq!(session.visible().len(), 16);

    session.select_location(Some("London".to_string()));
    let visible = session.visible();
    assert_eq!(visible.len(), 3);
    assert!(visible
        .iter()
        .all(|listing| listing.category == "Social Work"
            && listing.locations.iter().any(|place| place == "London")));
}

#[test]
fn changing_a_filter_returns_to_first_page() {
    let mut session = session();
    assert_eq!(session.next_page(), Some(ScrollRequest::Top));
    assert_eq!(session.next_page(), Some(ScrollRequest::Top));
    assert_eq!(session.current_page(), 3);

    session.select_location(Some("Remote".to_string()));
    assert_eq!(session.current_page(), 1);
    assert_eq!(session.page().total_results, 31);
    assert_eq!(session.page().total_pages, 4);
}

#[test]
fn previous_on_first_page_does_not_scroll() {
    let mut session = session();
    assert_eq!(session.previous_page(), None);
    assert_eq!(session.current_page(), 1);
}

#[test]
fn choosing_all_locations_clears_location_filter() {
    let mut session = session();
    session.location_selector_mut().toggle();
    session.location_selector_mut().set_query("lon");
    let london = session
        .location_options()
        .into_iter()
        .find(|option| option.label() == "London")
        .expect("London offered");
    session.choose_location(&london);
    assert_eq!(session.filter().selected_location.as_deref(), Some("London"));
    assert!(!session.location_selector().is_open());
    assert_eq!(session.location_selector().query(), "");

    session.choose_location(&LocationOption::All);
    assert_eq!(session.filter().selected_location, None);
    assert_eq!(session.visible().len(), 70);
}

#[test]
fn empty_results_hide_pagination() {
    let mut session = session();
    session.set_search_query("zookeeper");
    let page = session.page();
    assert_eq!(page.total_results, 0);
    assert!(page.items.is_empty());
    assert!(!page.show_pagination);
    assert_eq!(session.next_page(), None);
}

#[tokio::test]
async fn router_serves_filtered_pages() {
    let router = board_router(BoardState {
        catalog: catalog(),
        page_size: PAGE_SIZE,
    });
    let request = Request::get("/api/v1/jobs?category=Planning%20%26%20Urban%20Dev")
        .body(Body::empty())
        .expect("request builds");
    let response = router.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["total_results"], 5);
    assert_eq!(body["show_pagination"], false);
    assert_eq!(body["filters"]["selected_category"], "Planning & Urban Dev");
}
