use std::collections::BTreeMap;

use serde::Deserialize;

use super::domain::{JobListing, ListingId};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("listing '{title}' at position {position} has no locations")]
    EmptyLocations { title: String, position: usize },
    #[error("catalog contains no listings")]
    Empty,
    #[error("listing {0} does not exist")]
    UnknownListing(ListingId),
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    categories: Vec<String>,
    locations: Vec<String>,
    listings: Vec<JobListing>,
}

/// Listings whose category is not offered as a filter chip, grouped by that category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGap {
    pub category: String,
    pub listings: Vec<ListingId>,
}

/// Immutable listing store plus the category and location vocabularies shown alongside it.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<String>,
    locations: Vec<String>,
    listings: Vec<JobListing>,
}

impl Catalog {
    /// Parse the catalog compiled into the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        Self::new(document.categories, document.locations, document.listings)
    }

    /// Build a catalog, assigning each listing its position-based identifier.
    pub fn new(
        categories: Vec<String>,
        locations: Vec<String>,
        mut listings: Vec<JobListing>,
    ) -> Result<Self, CatalogError> {
        if listings.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, listing) in listings.iter_mut().enumerate() {
            if listing.locations.is_empty() {
                return Err(CatalogError::EmptyLocations {
                    title: listing.title.clone(),
                    position: index + 1,
                });
            }
            listing.id = ListingId(index as u32 + 1);
        }

        Ok(Self {
            categories,
            locations,
            listings,
        })
    }

    pub fn listings(&self) -> &[JobListing] {
        &self.listings
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: ListingId) -> Result<&JobListing, CatalogError> {
        let index = (id.0 as usize)
            .checked_sub(1)
            .ok_or(CatalogError::UnknownListing(id))?;
        self.listings
            .get(index)
            .ok_or(CatalogError::UnknownListing(id))
    }

    /// Listings that can never be reached through a category chip because their category is
    /// missing from the chip list. They still show under "All Jobs" and via text/location.
    pub fn unreachable_by_category(&self) -> Vec<CategoryGap> {
        let mut gaps: BTreeMap<&str, Vec<ListingId>> = BTreeMap::new();
        for listing in &self.listings {
            if !self.categories.iter().any(|c| c == &listing.category) {
                gaps.entry(listing.category.as_str())
                    .or_default()
                    .push(listing.id);
            }
        }

        gaps.into_iter()
            .map(|(category, listings)| CategoryGap {
                category: category.to_string(),
                listings,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Severity;

    fn listing(title: &str, category: &str, locations: &[&str]) -> JobListing {
        JobListing {
            id: ListingId(0),
            title: title.to_string(),
            category: category.to_string(),
            description: String::new(),
            locations: locations.iter().map(|l| l.to_string()).collect(),
            email: "info@focusrecruitment.co.uk".to_string(),
            phone: "02039473993".to_string(),
            hours: "Full-time (UK hours)".to_string(),
            responsibilities: Vec::new(),
            requirements: Vec::new(),
            severity: Severity::High,
        }
    }

    #[test]
    fn embedded_catalog_parses_in_source_order() {
        let catalog = Catalog::embedded().expect("embedded catalog is valid");
        assert_eq!(catalog.len(), 70);
        assert_eq!(catalog.categories().len(), 23);
        assert_eq!(catalog.locations().len(), 71);
        assert_eq!(&catalog.locations()[..2], ["London", "Remote"]);

        let first = &catalog.listings()[0];
        assert_eq!(first.id, ListingId(1));
        assert_eq!(first.title, "Senior Accountant (Remote)");
        assert_eq!(catalog.listings()[69].id, ListingId(70));
    }

    #[test]
    fn generated_city_variants_follow_location_order() {
        let catalog = Catalog::embedded().expect("embedded catalog is valid");
        let social_workers: Vec<_> = catalog
            .listings()
            .iter()
            .filter(|l| l.title == "Social Worker" && l.locations.len() == 1)
            .map(|l| l.locations[0].as_str())
            .collect();
        assert_eq!(&social_workers[..3], ["London", "Remote", "Aberdeen"]);
    }

    #[test]
    fn get_resolves_one_based_ids() {
        let catalog = Catalog::embedded().expect("embedded catalog is valid");
        assert_eq!(
            catalog.get(ListingId(2)).expect("exists").title,
            "Financial Controller (Remote)"
        );
        assert!(matches!(
            catalog.get(ListingId(0)),
            Err(CatalogError::UnknownListing(_))
        ));
        assert!(catalog.get(ListingId(71)).is_err());
    }

    #[test]
    fn rejects_listing_without_locations() {
        let err = Catalog::new(
            vec!["Legal".to_string()],
            vec!["London".to_string()],
            vec![listing("Paralegal", "Legal", &[])],
        )
        .expect_err("empty locations rejected");
        assert!(matches!(err, CatalogError::EmptyLocations { position: 1, .. }));
    }

    #[test]
    fn reports_categories_missing_from_chip_list() {
        let catalog = Catalog::new(
            vec!["Legal".to_string()],
            vec!["London".to_string()],
            vec![
                listing("Paralegal", "Legal", &["London"]),
                listing("Planner", "Planning", &["London"]),
                listing("Planner", "Planning", &["Remote"]),
            ],
        )
        .expect("valid catalog");

        let gaps = catalog.unreachable_by_category();
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].category, "Planning");
        assert_eq!(gaps[0].listings, vec![ListingId(2), ListingId(3)]);
    }

    #[test]
    fn embedded_catalog_has_uncategorised_listings() {
        let catalog = Catalog::embedded().expect("embedded catalog is valid");
        let total: usize = catalog
            .unreachable_by_category()
            .iter()
            .map(|gap| gap.listings.len())
            .sum();
        assert_eq!(total, 21);
    }
}
