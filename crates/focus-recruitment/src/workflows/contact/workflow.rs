use tracing::{error, info};

use super::dispatch::{ContactMessage, DispatchError, EmailDispatcher};
use super::domain::{ContactDraft, ContactKind, FieldErrors};
use super::validation::validate;

/// Only message shown to the visitor when delivery fails.
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactState {
    /// Editable form, possibly carrying the outcome of the last attempt.
    Idle {
        draft: ContactDraft,
        errors: FieldErrors,
        submit_error: Option<&'static str>,
    },
    Validating {
        draft: ContactDraft,
    },
    Submitting {
        draft: ContactDraft,
    },
    /// Confirmation panel replaces the form; the draft is gone.
    Success,
}

impl ContactState {
    pub const fn label(&self) -> &'static str {
        match self {
            ContactState::Idle { .. } => "idle",
            ContactState::Validating { .. } => "validating",
            ContactState::Submitting { .. } => "submitting",
            ContactState::Success => "success",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("cannot {action} while the contact form is {state}")]
    Transition {
        action: &'static str,
        state: &'static str,
    },
    #[error("contact form has errors: {0}")]
    Invalid(FieldErrors),
    #[error("Failed to send message. Please try again later.")]
    Dispatch(#[source] DispatchError),
}

/// Contact form state machine: `Idle -> Validating -> Submitting -> Success`, falling back to
/// `Idle` on field errors or delivery failure.
#[derive(Debug, Clone)]
pub struct ContactWorkflow {
    state: ContactState,
}

impl Default for ContactWorkflow {
    fn default() -> Self {
        Self::with_draft(ContactDraft::default())
    }
}

impl ContactWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: ContactDraft) -> Self {
        Self {
            state: ContactState::Idle {
                draft,
                errors: FieldErrors::default(),
                submit_error: None,
            },
        }
    }

    pub fn state(&self) -> &ContactState {
        &self.state
    }

    pub fn is_form_visible(&self) -> bool {
        !matches!(self.state, ContactState::Success)
    }

    pub fn draft(&self) -> Option<&ContactDraft> {
        match &self.state {
            ContactState::Idle { draft, .. }
            | ContactState::Validating { draft }
            | ContactState::Submitting { draft } => Some(draft),
            ContactState::Success => None,
        }
    }

    pub fn draft_mut(&mut self) -> Result<&mut ContactDraft, ContactError> {
        match &mut self.state {
            ContactState::Idle { draft, .. } => Ok(draft),
            other => Err(ContactError::Transition {
                action: "edit the form",
                state: other.label(),
            }),
        }
    }

    pub fn set_kind(&mut self, kind: ContactKind) -> Result<(), ContactError> {
        self.draft_mut()?.set_kind(kind);
        Ok(())
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match &self.state {
            ContactState::Idle { errors, .. } => Some(errors),
            _ => None,
        }
    }

    pub fn submit_error(&self) -> Option<&'static str> {
        match self.state {
            ContactState::Idle { submit_error, .. } => submit_error,
            _ => None,
        }
    }

    /// Validate and send the form. Field errors never reach the dispatcher; a failed send
    /// keeps every field so the visitor can retry.
    pub async fn submit<D>(&mut self, dispatcher: &D) -> Result<(), ContactError>
    where
        D: EmailDispatcher + ?Sized,
    {
        let draft = match std::mem::replace(&mut self.state, ContactState::Success) {
            ContactState::Idle { draft, .. } => draft,
            other => {
                let state = other.label();
                self.state = other;
                return Err(ContactError::Transition {
                    action: "submit",
                    state,
                });
            }
        };

        self.state = ContactState::Validating {
            draft: draft.clone(),
        };
        let errors = validate(&draft);
        if !errors.is_empty() {
            self.state = ContactState::Idle {
                draft,
                errors: errors.clone(),
                submit_error: None,
            };
            return Err(ContactError::Invalid(errors));
        }

        let message = ContactMessage::from(&draft);
        self.state = ContactState::Submitting {
            draft: draft.clone(),
        };

        match dispatcher.dispatch(&message).await {
            Ok(()) => {
                info!(contact_type = %message.kind, "contact message sent");
                self.state = ContactState::Success;
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "error sending contact message");
                self.state = ContactState::Idle {
                    draft,
                    errors: FieldErrors::default(),
                    submit_error: Some(SEND_FAILED_MESSAGE),
                };
                Err(ContactError::Dispatch(err))
            }
        }
    }
}
