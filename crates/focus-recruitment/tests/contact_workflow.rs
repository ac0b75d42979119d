//! Contact form scenarios driven through the public workflow with stand-in dispatchers.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use focus_recruitment::workflows::contact::{
    ContactDraft, ContactError, ContactField, ContactKind, ContactMessage, ContactState,
    ContactWorkflow, DispatchError, EmailDispatcher, RecruitmentService, SEND_FAILED_MESSAGE,
};
use focus_recruitment::workflows::CvAttachment;

/// Fails the first `failures` sends, then succeeds.
struct FlakyDispatcher {
    failures: usize,
    calls: AtomicUsize,
}

impl FlakyDispatcher {
    fn new(failures: usize) -> Self {
        Self {
            failures,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailDispatcher for FlakyDispatcher {
    async fn dispatch(&self, _: &ContactMessage) -> Result<(), DispatchError> {
        let attempt = self.calls.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures {
            Err(DispatchError::Network("timed out".to_string()))
        } else {
            Ok(())
        }
    }
}

fn candidate() -> ContactDraft {
    ContactDraft {
        name: "Priya Shah".to_string(),
        email: "priya@example.org".to_string(),
        message: "Interested in adoption assessment work".to_string(),
        kind: ContactKind::Candidate,
        cv: Some(CvAttachment::new("priya-shah.pdf")),
        service: None,
    }
}

#[tokio::test]
async fn success_replaces_form_with_confirmation() {
    let dispatcher = FlakyDispatcher::new(0);
    let mut workflow = ContactWorkflow::with_draft(candidate());
    workflow.submit(&dispatcher).await.expect("sent");

    assert_eq!(*workflow.state(), ContactState::Success);
    assert!(!workflow.is_form_visible());
    assert!(workflow.draft().is_none());
    assert_eq!(dispatcher.calls(), 1);
}

#[tokio::test]
async fn switching_to_company_requires_a_service() {
    let dispatcher = FlakyDispatcher::new(0);
    let mut workflow = ContactWorkflow::with_draft(candidate());
    workflow.set_kind(ContactKind::Company).expect("idle");
    assert_eq!(workflow.draft().and_then(|d| d.cv.as_ref()), None);

    let err = workflow.submit(&dispatcher).await.expect_err("no service");
    match err {
        ContactError::Invalid(errors) => {
            assert_eq!(errors.fields().collect::<Vec<_>>(), [ContactField::Service]);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(dispatcher.calls(), 0);

    workflow.draft_mut().expect("idle").service = Some(RecruitmentService::Other);
    workflow.submit(&dispatcher).await.expect("sent");
    assert_eq!(dispatcher.calls(), 1);
}

#[tokio::test]
async fn transport_failure_preserves_fields_for_retry() {
    let dispatcher = FlakyDispatcher::new(1);
    let mut workflow = ContactWorkflow::with_draft(candidate());

    let err = workflow.submit(&dispatcher).await.expect_err("first send fails");
    assert!(matches!(err, ContactError::Dispatch(_)));
    assert!(workflow.is_form_visible());
    assert_eq!(workflow.submit_error(), Some(SEND_FAILED_MESSAGE));
    assert_eq!(workflow.draft(), Some(&candidate()));

    workflow.submit(&dispatcher).await.expect("retry succeeds");
    assert_eq!(dispatcher.calls(), 2);
    assert!(!workflow.is_form_visible());
}

#[tokio::test]
async fn invalid_email_blocks_dispatch() {
    let dispatcher = FlakyDispatcher::new(0);
    let mut workflow = ContactWorkflow::with_draft(ContactDraft {
        email: "priya@example".to_string(),
        ..candidate()
    });
    assert!(workflow.submit(&dispatcher).await.is_err());
    assert_eq!(
        workflow.errors().and_then(|errors| errors.get(ContactField::Email)),
        Some("Invalid email format")
    );
    assert_eq!(dispatcher.calls(), 0);
}
