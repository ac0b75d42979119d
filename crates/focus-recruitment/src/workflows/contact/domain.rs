use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::workflows::attachment::CvAttachment;

/// Who is getting in touch. The kind decides which extra field is required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Candidate,
    #[default]
    Company,
}

impl ContactKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ContactKind::Candidate => "candidate",
            ContactKind::Company => "company",
        }
    }
}

/// Service a company can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecruitmentService {
    Permanent,
    Contract,
    Executive,
    Other,
}

impl RecruitmentService {
    pub const ALL: [RecruitmentService; 4] = [
        RecruitmentService::Permanent,
        RecruitmentService::Contract,
        RecruitmentService::Executive,
        RecruitmentService::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            RecruitmentService::Permanent => "permanent",
            RecruitmentService::Contract => "contract",
            RecruitmentService::Executive => "executive",
            RecruitmentService::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RecruitmentService::Permanent => "Permanent Recruitment",
            RecruitmentService::Contract => "Contract Recruitment",
            RecruitmentService::Executive => "Executive Search",
            RecruitmentService::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|service| service.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: ContactKind,
    #[serde(default)]
    pub cv: Option<CvAttachment>,
    #[serde(default, deserialize_with = "blank_service_as_none")]
    pub service: Option<RecruitmentService>,
}

const SERVICE_VARIANTS: &[&str] = &["permanent", "contract", "executive", "other"];

/// The form posts `""` until a service is picked.
fn blank_service_as_none<'de, D>(deserializer: D) -> Result<Option<RecruitmentService>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.filter(|value| !value.trim().is_empty()) {
        None => Ok(None),
        Some(value) => RecruitmentService::parse(&value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::unknown_variant(&value, SERVICE_VARIANTS)),
    }
}

impl ContactDraft {
    /// Switching between candidate and company drops both kind-specific fields.
    pub fn set_kind(&mut self, kind: ContactKind) {
        self.kind = kind;
        self.cv = None;
        self.service = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
    Cv,
    Service,
}

impl ContactField {
    pub const fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
            ContactField::Cv => "cv",
            ContactField::Service => "service",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline messages keyed by form field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ContactField, &'static str>);

impl FieldErrors {
    pub fn insert(&mut self, field: ContactField, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.keys().copied()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_kind_clears_kind_specific_fields() {
        let mut draft = ContactDraft {
            name: "Jane".to_string(),
            cv: Some(CvAttachment::new("cv.pdf")),
            service: Some(RecruitmentService::Executive),
            ..ContactDraft::default()
        };
        draft.set_kind(ContactKind::Candidate);
        assert_eq!(draft.kind, ContactKind::Candidate);
        assert_eq!(draft.cv, None);
        assert_eq!(draft.service, None);
        assert_eq!(draft.name, "Jane");
    }

    #[test]
    fn draft_defaults_to_company_enquiry() {
        let draft: ContactDraft = serde_json::from_str(r#"{"name":"Acme"}"#).expect("parses");
        assert_eq!(draft.kind, ContactKind::Company);

        let draft: ContactDraft =
            serde_json::from_str(r#"{"type":"company","service":"contract"}"#).expect("parses");
        assert_eq!(draft.service, Some(RecruitmentService::Contract));
    }

    #[test]
    fn blank_service_means_none_selected() {
        let draft: ContactDraft =
            serde_json::from_str(r#"{"type":"candidate","service":""}"#).expect("parses");
        assert_eq!(draft.service, None);

        let draft: ContactDraft = serde_json::from_str(r#"{"service":null}"#).expect("parses");
        assert_eq!(draft.service, None);

        let err = serde_json::from_str::<ContactDraft>(r#"{"service":"temp"}"#)
            .expect_err("unknown service");
        assert!(err.to_string().contains("unknown variant"));
    }

    #[test]
    fn field_errors_serialize_in_form_order() {
        let mut errors = FieldErrors::default();
        errors.insert(ContactField::Service, "Please select a service");
        errors.insert(ContactField::Name, "Name is required");
        let json = serde_json::to_string(&errors).expect("serializes");
        assert_eq!(
            json,
            r#"{"name":"Name is required","service":"Please select a service"}"#
        );
    }

    #[test]
    fn services_parse_case_insensitively() {
        assert_eq!(
            RecruitmentService::parse(" Executive "),
            Some(RecruitmentService::Executive)
        );
        assert_eq!(RecruitmentService::parse("temp"), None);
    }
}
