use std::sync::Arc;

use crate::catalog::{Catalog, JobListing};

use super::filter::{filter_listings, FilterState};
use super::locations::{LocationOption, LocationSelector, ALL_LOCATIONS};
use super::pagination::{PageView, Paginator};

/// Side effect requested by a page change. The caller decides how (and whether) to honour it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    Top,
}

/// Per-visitor board state: the filter inputs, the page cursor and the location dropdown.
///
/// Every mutation of a filter input that actually changes its value sends the cursor back to
/// page 1, because the filtered count it pages over has changed.
#[derive(Debug, Clone)]
pub struct JobBoardSession {
    catalog: Arc<Catalog>,
    filter: FilterState,
    paginator: Paginator,
    selector: LocationSelector,
}

impl JobBoardSession {
    pub fn new(catalog: Arc<Catalog>, page_size: usize) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
            paginator: Paginator::new(page_size),
            selector: LocationSelector::default(),
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn location_selector(&self) -> &LocationSelector {
        &self.selector
    }

    pub fn location_selector_mut(&mut self) -> &mut LocationSelector {
        &mut self.selector
    }

    /// Text on the closed dropdown button, read from the active location filter.
    pub fn location_label(&self) -> &str {
        self.filter
            .selected_location
            .as_deref()
            .unwrap_or(ALL_LOCATIONS)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.filter.search_query != query {
            self.filter.search_query = query;
            self.paginator.reset();
        }
    }

    pub fn select_category(&mut self, category: Option<String>) {
        if self.filter.selected_category != category {
            self.filter.selected_category = category;
            self.paginator.reset();
        }
    }

    pub fn select_location(&mut self, location: Option<String>) {
        if self.filter.selected_location != location {
            self.filter.selected_location = location;
            self.paginator.reset();
        }
    }

    /// Pick a row from the location dropdown.
    pub fn choose_location(&mut self, option: &LocationOption) {
        let selected = self.selector.choose(option);
        self.select_location(selected);
    }

    pub fn location_options(&self) -> Vec<LocationOption> {
        self.selector.options(self.catalog.locations())
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.selector.clear();
        self.paginator.reset();
    }

    pub fn visible(&self) -> Vec<&JobListing> {
        filter_listings(self.catalog.listings(), &self.filter)
    }

    pub fn page(&self) -> PageView<JobListing> {
        let visible: Vec<JobListing> = self.visible().into_iter().cloned().collect();
        self.paginator.view(&visible)
    }

    pub fn next_page(&mut self) -> Option<ScrollRequest> {
        let total = self.visible().len();
        self.paginator.next(total).then_some(ScrollRequest::Top)
    }

    pub fn previous_page(&mut self) -> Option<ScrollRequest> {
        self.paginator.previous().then_some(ScrollRequest::Top)
    }
}
