//! Contact page form: validation, delivery through EmailJS and the send/retry cycle.

mod dispatch;
pub mod domain;
pub mod router;
mod validation;
mod workflow;

pub use dispatch::{
    ContactMessage, DispatchError, EmailDispatcher, EmailJsDispatcher, NO_CV_ATTACHED,
};
pub use domain::{ContactDraft, ContactField, ContactKind, FieldErrors, RecruitmentService};
pub use router::contact_router;
pub use validation::{is_valid_email, validate};
pub use workflow::{ContactError, ContactState, ContactWorkflow, SEND_FAILED_MESSAGE};
