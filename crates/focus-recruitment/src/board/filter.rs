use serde::{Deserialize, Serialize};

use crate::catalog::JobListing;

/// The three independent predicates narrowing the board. Absent predicates match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub selected_category: Option<String>,
    #[serde(default)]
    pub selected_location: Option<String>,
}

impl FilterState {
    pub fn is_unfiltered(&self) -> bool {
        self.search_query.is_empty()
            && self.selected_category.is_none()
            && self.selected_location.is_none()
    }

    /// Case-insensitive substring match against title or description. The query is not trimmed.
    pub fn matches_text(&self, listing: &JobListing) -> bool {
        if self.search_query.is_empty() {
            return true;
        }

        let needle = self.search_query.to_lowercase();
        listing.title.to_lowercase().contains(&needle)
            || listing.description.to_lowercase().contains(&needle)
    }

    /// Exact, case-sensitive category match.
    pub fn matches_category(&self, listing: &JobListing) -> bool {
        match &self.selected_category {
            Some(category) => &listing.category == category,
            None => true,
        }
    }

    /// Exact membership of the selected place in the listing's locations.
    pub fn matches_location(&self, listing: &JobListing) -> bool {
        match &self.selected_location {
            Some(location) => listing.is_offered_in(location),
            None => true,
        }
    }

    pub fn matches(&self, listing: &JobListing) -> bool {
        self.matches_text(listing) && self.matches_category(listing) && self.matches_location(listing)
    }
}

/// Recompute the visible subset from scratch, preserving catalog order.
pub fn filter_listings<'a>(listings: &'a [JobListing], state: &FilterState) -> Vec<&'a JobListing> {
    listings.iter().filter(|listing| state.matches(listing)).collect()
}
