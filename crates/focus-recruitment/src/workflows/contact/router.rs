use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use super::dispatch::EmailDispatcher;
use super::domain::ContactDraft;
use super::workflow::{ContactError, ContactWorkflow, SEND_FAILED_MESSAGE};

/// Router exposing the contact form submission endpoint.
pub fn contact_router<D>(dispatcher: Arc<D>) -> Router
where
    D: EmailDispatcher + 'static,
{
    Router::new()
        .route("/api/v1/contact", post(contact_handler::<D>))
        .with_state(dispatcher)
}

pub(crate) async fn contact_handler<D>(
    State(dispatcher): State<Arc<D>>,
    payload: Result<Json<ContactDraft>, JsonRejection>,
) -> Response
where
    D: EmailDispatcher + 'static,
{
    let Json(draft) = match payload {
        Ok(draft) => draft,
        Err(rejection) => {
            let payload = json!({ "error": rejection.body_text() });
            return (rejection.status(), Json(payload)).into_response();
        }
    };
    let mut workflow = ContactWorkflow::with_draft(draft);
    match workflow.submit(dispatcher.as_ref()).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "sent" }))).into_response(),
        Err(ContactError::Invalid(errors)) => {
            let payload = json!({ "errors": errors });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(ContactError::Dispatch(_)) => {
            let payload = json!({ "error": SEND_FAILED_MESSAGE });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::contact::{ContactMessage, DispatchError};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    struct StubDispatcher {
        fail: bool,
        calls: AtomicUsize,
    }

    impl StubDispatcher {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                fail,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl EmailDispatcher for StubDispatcher {
        async fn dispatch(&self, _: &ContactMessage) -> Result<(), DispatchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(DispatchError::Provider {
                    status: 400,
                    body: "The user ID is invalid".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    async fn post(dispatcher: Arc<StubDispatcher>, body: Value) -> (StatusCode, Value) {
        let request = Request::post("/api/v1/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");
        let response = contact_router(dispatcher)
            .oneshot(request)
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    fn candidate() -> Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": "Open to social work roles in London",
            "type": "candidate",
            "cv": { "file_name": "jane.pdf" }
        })
    }

    #[tokio::test]
    async fn valid_message_is_sent() {
        let dispatcher = StubDispatcher::new(false);
        let (status, body) = post(dispatcher.clone(), candidate()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "sent");
        assert_eq!(dispatcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn field_errors_are_returned_without_dispatch() {
        let dispatcher = StubDispatcher::new(false);
        let (status, body) = post(
            dispatcher.clone(),
            json!({ "name": "Acme", "email": "not-an-email", "message": "Hi" }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"]["email"], "Invalid email format");
        assert_eq!(body["errors"]["service"], "Please select a service");
        assert_eq!(dispatcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unselected_service_from_the_form_is_accepted() {
        let dispatcher = StubDispatcher::new(false);
        let mut body = candidate();
        body["service"] = json!("");
        let (status, body) = post(dispatcher.clone(), body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "sent");
        assert_eq!(dispatcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn company_with_blank_service_gets_field_error() {
        let dispatcher = StubDispatcher::new(false);
        let (status, body) = post(
            dispatcher.clone(),
            json!({
                "name": "Acme Ltd",
                "email": "hr@acme.co.uk",
                "message": "Hiring two planners",
                "type": "company",
                "service": ""
            }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"]["service"], "Please select a service");
        assert_eq!(dispatcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn malformed_body_returns_json_error() {
        let dispatcher = StubDispatcher::new(false);
        let (status, body) = post(dispatcher.clone(), json!({ "type": "agency" })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().is_some_and(|e| e.contains("agency")));
        assert_eq!(dispatcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn provider_failure_maps_to_bad_gateway() {
        let (status, body) = post(StubDispatcher::new(true), candidate()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], SEND_FAILED_MESSAGE);
    }
}
