use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::catalog::{Catalog, CatalogError, JobListing, ListingId};

use super::domain::{ApplicationDraft, ApplicationPolicy};
use super::log::ApplicationLog;
use super::workflow::{ApplicationError, ApplicationWorkflow, AUTO_CLOSE_DELAY_MS};

/// Service driving one apply dialog per request against the shared catalog.
pub struct ApplicationService<L> {
    catalog: Arc<Catalog>,
    log: Arc<L>,
    policy: ApplicationPolicy,
}

/// Confirmation shown to the applicant before the dialog closes itself.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationReceipt {
    pub status: &'static str,
    pub job: JobListing,
    pub auto_close_after_ms: i64,
}

impl<L> ApplicationService<L>
where
    L: ApplicationLog + 'static,
{
    pub fn new(catalog: Arc<Catalog>, log: Arc<L>, policy: ApplicationPolicy) -> Self {
        Self {
            catalog,
            log,
            policy,
        }
    }

    /// Open a dialog for `listing_id`, fill it with `draft` and submit it.
    pub fn apply(
        &self,
        listing_id: ListingId,
        draft: ApplicationDraft,
    ) -> Result<ApplicationReceipt, ApplicationServiceError> {
        let job = self.catalog.get(listing_id)?;

        let mut workflow = ApplicationWorkflow::new(self.policy);
        workflow.open(job);
        workflow.update_draft(draft).map_err(ApplicationError::from)?;
        let submitted = workflow.submit(self.log.as_ref(), Utc::now())?;

        Ok(ApplicationReceipt {
            status: "submitted",
            job: submitted.job,
            auto_close_after_ms: AUTO_CLOSE_DELAY_MS,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Application(#[from] ApplicationError),
}
