//! "Apply Now" dialog: a presence-checked draft handed to an application log.

pub mod domain;
mod log;
pub mod router;
pub mod service;
mod workflow;

pub use domain::{ApplicationDraft, ApplicationField, ApplicationPolicy, SubmittedApplication};
pub use log::{ApplicationLog, TracingApplicationLog};
pub use router::application_router;
pub use service::{ApplicationReceipt, ApplicationService, ApplicationServiceError};
pub use workflow::{
    auto_close_delay, ApplicationError, ApplicationState, ApplicationWorkflow, TransitionError,
    AUTO_CLOSE_DELAY_MS,
};
