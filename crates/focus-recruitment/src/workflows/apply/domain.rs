use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::JobListing;
use crate::workflows::attachment::CvAttachment;

/// Applicant details captured by the apply dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub cv: Option<CvAttachment>,
}

/// Inputs the dialog marks as required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationField {
    FullName,
    Email,
    Phone,
    Cv,
}

impl ApplicationField {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationField::FullName => "full_name",
            ApplicationField::Email => "email",
            ApplicationField::Phone => "phone",
            ApplicationField::Cv => "cv",
        }
    }
}

impl fmt::Display for ApplicationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presence rules for the apply dialog. Values are not format-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationPolicy {
    pub require_cv: bool,
}

impl Default for ApplicationPolicy {
    fn default() -> Self {
        Self { require_cv: true }
    }
}

impl ApplicationPolicy {
    pub fn missing_fields(&self, draft: &ApplicationDraft) -> Vec<ApplicationField> {
        let mut missing = Vec::new();
        if draft.full_name.trim().is_empty() {
            missing.push(ApplicationField::FullName);
        }
        if draft.email.trim().is_empty() {
            missing.push(ApplicationField::Email);
        }
        if draft.phone.trim().is_empty() {
            missing.push(ApplicationField::Phone);
        }
        if self.require_cv && draft.cv.is_none() {
            missing.push(ApplicationField::Cv);
        }
        missing
    }
}

/// What gets handed to the application log once the dialog reports success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedApplication {
    pub job: JobListing,
    pub draft: ApplicationDraft,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_fields_are_missing() {
        let draft = ApplicationDraft {
            full_name: "  ".to_string(),
            email: "jane@example.com".to_string(),
            phone: "\t".to_string(),
            message: None,
            cv: Some(CvAttachment::new("cv.pdf")),
        };
        assert_eq!(
            ApplicationPolicy::default().missing_fields(&draft),
            vec![ApplicationField::FullName, ApplicationField::Phone]
        );
    }

    #[test]
    fn cv_requirement_follows_policy() {
        let draft = ApplicationDraft {
            full_name: "Jane Doe".to_string(),
            email: "not-checked".to_string(),
            phone: "07700 900123".to_string(),
            ..ApplicationDraft::default()
        };
        assert_eq!(
            ApplicationPolicy::default().missing_fields(&draft),
            vec![ApplicationField::Cv]
        );
        assert!(ApplicationPolicy { require_cv: false }
            .missing_fields(&draft)
            .is_empty());
    }
}
