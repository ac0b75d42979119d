use tracing::info;

use super::domain::SubmittedApplication;

/// Sink receiving completed applications. Nothing is transmitted to the hiring team; the
/// default sink records a structured event and drops the draft.
pub trait ApplicationLog: Send + Sync {
    fn record(&self, application: &SubmittedApplication);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingApplicationLog;

impl ApplicationLog for TracingApplicationLog {
    fn record(&self, application: &SubmittedApplication) {
        let draft = &application.draft;
        info!(
            listing_id = %application.job.id,
            job_title = %application.job.title,
            applicant = %draft.full_name,
            email = %draft.email,
            phone = %draft.phone,
            has_message = draft.message.as_deref().is_some_and(|m| !m.trim().is_empty()),
            cv = draft.cv.as_ref().map(|cv| cv.file_name.as_str()).unwrap_or("none"),
            submitted_at = %application.submitted_at,
            "job application submitted"
        );
    }
}
