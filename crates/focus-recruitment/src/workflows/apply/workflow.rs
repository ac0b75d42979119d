use chrono::{DateTime, Duration, Utc};

use crate::catalog::JobListing;

use super::domain::{ApplicationDraft, ApplicationField, ApplicationPolicy, SubmittedApplication};
use super::log::ApplicationLog;

/// How long the confirmation stays up before the dialog closes itself.
pub const AUTO_CLOSE_DELAY_MS: i64 = 2_000;

pub fn auto_close_delay() -> Duration {
    Duration::milliseconds(AUTO_CLOSE_DELAY_MS)
}

/// Lifecycle of the apply dialog for a single job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationState {
    Closed,
    Open {
        job: Box<JobListing>,
        draft: ApplicationDraft,
    },
    Submitting {
        job: Box<JobListing>,
        draft: ApplicationDraft,
    },
    Submitted {
        job: Box<JobListing>,
        submitted_at: DateTime<Utc>,
    },
}

impl ApplicationState {
    pub const fn label(&self) -> &'static str {
        match self {
            ApplicationState::Closed => "closed",
            ApplicationState::Open { .. } => "open",
            ApplicationState::Submitting { .. } => "submitting",
            ApplicationState::Submitted { .. } => "submitted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot {action} while the application dialog is {state}")]
pub struct TransitionError {
    pub action: &'static str,
    pub state: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("application rejected, missing required fields: {}", join_fields(.missing))]
    Rejected { missing: Vec<ApplicationField> },
    #[error("CV '{file_name}' must be a .pdf, .doc or .docx file")]
    UnsupportedCv { file_name: String },
}

fn join_fields(fields: &[ApplicationField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Apply dialog state machine: `Closed -> Open -> Submitting -> Submitted -> Closed`.
#[derive(Debug, Clone)]
pub struct ApplicationWorkflow {
    state: ApplicationState,
    policy: ApplicationPolicy,
}

impl Default for ApplicationWorkflow {
    fn default() -> Self {
        Self::new(ApplicationPolicy::default())
    }
}

impl ApplicationWorkflow {
    pub fn new(policy: ApplicationPolicy) -> Self {
        Self {
            state: ApplicationState::Closed,
            policy,
        }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, ApplicationState::Closed)
    }

    /// Open the dialog for `job` with an empty draft. Re-opening discards any previous draft.
    pub fn open(&mut self, job: &JobListing) {
        self.state = ApplicationState::Open {
            job: Box::new(job.clone()),
            draft: ApplicationDraft::default(),
        };
    }

    pub fn draft_mut(&mut self) -> Result<&mut ApplicationDraft, TransitionError> {
        match &mut self.state {
            ApplicationState::Open { draft, .. } => Ok(draft),
            other => Err(TransitionError {
                action: "edit the draft",
                state: other.label(),
            }),
        }
    }

    pub fn update_draft(&mut self, draft: ApplicationDraft) -> Result<(), TransitionError> {
        *self.draft_mut()? = draft;
        Ok(())
    }

    /// Explicit cancel: drop the draft and close.
    pub fn cancel(&mut self) -> Result<(), TransitionError> {
        match self.state {
            ApplicationState::Open { .. } => {
                self.state = ApplicationState::Closed;
                Ok(())
            }
            ref other => Err(TransitionError {
                action: "cancel",
                state: other.label(),
            }),
        }
    }

    /// Backdrop click or close button: always ends in `Closed`.
    pub fn close(&mut self) {
        self.state = ApplicationState::Closed;
    }

    /// Validate the draft, hand it to `log` and show the confirmation. A failed check leaves
    /// the dialog open with the draft untouched.
    pub fn submit<L>(
        &mut self,
        log: &L,
        now: DateTime<Utc>,
    ) -> Result<SubmittedApplication, ApplicationError>
    where
        L: ApplicationLog + ?Sized,
    {
        let (job, draft) = match std::mem::replace(&mut self.state, ApplicationState::Closed) {
            ApplicationState::Open { job, draft } => (job, draft),
            other => {
                let state = other.label();
                self.state = other;
                return Err(TransitionError {
                    action: "submit",
                    state,
                }
                .into());
            }
        };

        let missing = self.policy.missing_fields(&draft);
        if !missing.is_empty() {
            self.state = ApplicationState::Open { job, draft };
            return Err(ApplicationError::Rejected { missing });
        }

        if let Some(cv) = draft.cv.as_ref().filter(|cv| !cv.has_accepted_extension()) {
            let file_name = cv.file_name.clone();
            self.state = ApplicationState::Open { job, draft };
            return Err(ApplicationError::UnsupportedCv { file_name });
        }

        self.state = ApplicationState::Submitting {
            job: job.clone(),
            draft: draft.clone(),
        };

        let application = SubmittedApplication {
            job: *job.clone(),
            draft,
            submitted_at: now,
        };

        log.record(&application);
        self.state = ApplicationState::Submitted {
            job,
            submitted_at: now,
        };
        Ok(application)
    }

    /// Advance the auto-close timer. Returns `true` when the dialog closed on this call.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        match self.state {
            ApplicationState::Submitted { submitted_at, .. }
                if now - submitted_at >= auto_close_delay() =>
            {
                self.state = ApplicationState::Closed;
                true
            }
            _ => false,
        }
    }
}
