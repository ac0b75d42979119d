use std::sync::OnceLock;

use regex::Regex;

use super::domain::{ContactDraft, ContactField, ContactKind, FieldErrors};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const CV_REQUIRED: &str = "CV is required for candidates";
pub const SERVICE_REQUIRED: &str = "Please select a service";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Check every field at once. An empty result means the draft can be dispatched.
pub fn validate(draft: &ContactDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.name.trim().is_empty() {
        errors.insert(ContactField::Name, NAME_REQUIRED);
    }

    // The pattern runs on the raw value, so padded addresses are rejected.
    if draft.email.trim().is_empty() {
        errors.insert(ContactField::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&draft.email) {
        errors.insert(ContactField::Email, EMAIL_INVALID);
    }

    if draft.message.trim().is_empty() {
        errors.insert(ContactField::Message, MESSAGE_REQUIRED);
    }

    match draft.kind {
        ContactKind::Candidate if draft.cv.is_none() => {
            errors.insert(ContactField::Cv, CV_REQUIRED);
        }
        ContactKind::Company if draft.service.is_none() => {
            errors.insert(ContactField::Service, SERVICE_REQUIRED);
        }
        _ => {}
    }

    errors
}
