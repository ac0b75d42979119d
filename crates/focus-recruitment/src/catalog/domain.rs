use std::fmt;

use serde::{Deserialize, Serialize};

/// 1-based position of a listing in the catalog. Titles repeat across per-city variants, so
/// the position is the only stable identity a listing has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u32);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decorative urgency marker shown on job cards. No filter reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// A job posting as advertised on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(default = "ListingId::unassigned")]
    pub id: ListingId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub locations: Vec<String>,
    pub email: String,
    pub phone: String,
    pub hours: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub severity: Severity,
}

impl ListingId {
    fn unassigned() -> Self {
        ListingId(0)
    }
}

impl JobListing {
    pub fn is_offered_in(&self, location: &str) -> bool {
        self.locations.iter().any(|candidate| candidate == location)
    }
}
