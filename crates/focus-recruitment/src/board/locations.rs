use serde::Serialize;

/// Places rendered in bold at the top of the dropdown.
const FEATURED_LOCATIONS: [&str; 2] = ["London", "Remote"];

/// Dropdown text while no location is chosen.
pub const ALL_LOCATIONS: &str = "All Locations";

/// One row of the location dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LocationOption {
    /// Sentinel clearing the location filter.
    All,
    Place { name: String, featured: bool },
}

impl LocationOption {
    pub fn label(&self) -> &str {
        match self {
            LocationOption::All => ALL_LOCATIONS,
            LocationOption::Place { name, .. } => name,
        }
    }
}

/// Searchable dropdown over the static place list. Its own search box is independent of the
/// board's text search. The chosen place lives in the board's `FilterState`, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSelector {
    query: String,
    open: bool,
}

impl LocationSelector {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Options matching the current query. The "All Locations" sentinel only appears while the
    /// search box is empty.
    pub fn options(&self, places: &[String]) -> Vec<LocationOption> {
        location_options(places, &self.query)
    }

    /// Close the dropdown and clear the search box. Returns the location filter value the
    /// choice stands for.
    pub fn choose(&mut self, option: &LocationOption) -> Option<String> {
        self.open = false;
        self.query.clear();
        match option {
            LocationOption::All => None,
            LocationOption::Place { name, .. } => Some(name.clone()),
        }
    }

    /// Click outside the dropdown: close it, keep the query.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    pub fn clear(&mut self) {
        self.open = false;
        self.query.clear();
    }
}

pub fn location_options(places: &[String], query: &str) -> Vec<LocationOption> {
    let needle = query.to_lowercase();
    let mut options = Vec::with_capacity(places.len() + 1);
    if query.is_empty() {
        options.push(LocationOption::All);
    }

    options.extend(
        places
            .iter()
            .filter(|place| place.to_lowercase().contains(&needle))
            .map(|place| LocationOption::Place {
                name: place.clone(),
                featured: FEATURED_LOCATIONS.contains(&place.as_str()),
            }),
    );
    options
}
