//! Static listing store backing the jobs board.
//!
//! Listings are compiled into the binary and parsed once; nothing here is ever mutated after
//! start-up.

pub mod domain;
mod store;

pub use domain::{JobListing, ListingId, Severity};
pub use store::{Catalog, CatalogError, CategoryGap};
