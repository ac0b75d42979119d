use serde::Serialize;

/// Listings shown per board page.
pub const PAGE_SIZE: usize = 9;

/// Fixed-size paging over the filtered subset. The page index only ever moves one step at a
/// time, and only when the matching control would be enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Paginator {
    /// A zero page size falls back to [`PAGE_SIZE`].
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: if page_size == 0 { PAGE_SIZE } else { page_size },
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.current_page < self.total_pages(total)
    }

    /// Returns `true` when the page changed.
    pub fn next(&mut self, total: usize) -> bool {
        if self.has_next(total) {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` when the page changed.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Position on `page`, clamped into the pages `total` items produce (page 1 when empty).
    pub fn at_page(page_size: usize, page: usize, total: usize) -> Self {
        let mut paginator = Self::new(page_size);
        let last = paginator.total_pages(total).max(1);
        paginator.current_page = page.clamp(1, last);
        paginator
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn view<T: Clone>(&self, items: &[T]) -> PageView<T> {
        let total = items.len();
        let total_pages = self.total_pages(total);
        PageView {
            page: self.current_page,
            page_size: self.page_size,
            total_pages,
            total_results: total,
            has_previous: self.has_previous(),
            has_next: self.has_next(total),
            show_pagination: total_pages > 1,
            items: self.slice(items).to_vec(),
        }
    }
}

/// Snapshot of one page of results plus the state of the paging controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView<T> {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_results: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub show_pagination: bool,
    pub items: Vec<T>,
}
