//! Module: table
//! Responsibility: the tabular view pipeline (filter → sort → paginate)
//! and its view-state/result contracts.
//! Does not own: rendering, per-dataset state, or the caller-side rule
//! that a search change resets the page.

mod filter;
mod order;
mod page;

#[cfg(test)]
mod tests;

use crate::record::Record;
use serde::Serialize;

pub use page::PageRequest;

///
/// OrderDirection
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    /// The opposite direction; the console flips on repeated sort of the
    /// same field.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

///
/// SortSpec
///
/// One sort field plus direction. Resolution is single-level field access;
/// dot-paths are a display-only concept.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: OrderDirection,
}

impl SortSpec {
    #[must_use]
    pub fn new(field: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

///
/// TableQuery
///
/// Immutable view-state for one recomputation of a tabular view. The
/// caller owns search/sort/page state and passes it in fresh on every
/// invocation; the engine itself holds nothing between calls.
///
/// Caller contract (not enforced here): changing the search string must
/// reset the page to 1, since a new search invalidates the old page
/// position.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TableQuery {
    search: String,
    sort: Option<SortSpec>,
    page: PageRequest,
}

impl TableQuery {
    /// Create an intent with no search, no sort, and the default page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search query.
    #[must_use]
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    /// Sort ascending by `field`.
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(SortSpec::new(field, OrderDirection::Asc));
        self
    }

    /// Sort descending by `field`.
    #[must_use]
    pub fn order_by_desc(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(SortSpec::new(field, OrderDirection::Desc));
        self
    }

    /// Replace the full sort spec (or clear it).
    #[must_use]
    pub fn sorted(mut self, sort: Option<SortSpec>) -> Self {
        self.sort = sort;
        self
    }

    /// Replace the pagination settings.
    #[must_use]
    pub const fn page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    #[must_use]
    pub const fn page_request(&self) -> PageRequest {
        self.page
    }

    /// Run the pipeline over a record snapshot.
    ///
    /// Stages apply in fixed order: whole-record substring filter, stable
    /// null-last sort, page window. Pure per call: identical inputs yield
    /// identical output.
    #[must_use]
    pub fn execute<'a, R: Record>(&self, records: &'a [R]) -> TableView<'a, R> {
        let mut matched = filter::apply(records, &self.search);
        let filtered = matched.len();

        if let Some(sort) = &self.sort {
            order::apply(&mut matched, sort);
        }

        let window = page::window(&self.page, filtered);
        let rows = matched[window.start..window.end].to_vec();

        TableView {
            rows,
            filtered,
            total_pages: window.total_pages,
            window_start: window.start,
        }
    }
}

///
/// TableView
///
/// One page of a filtered, sorted view plus the pagination metadata the
/// footer renders. Borrows the caller's record snapshot.
///

#[derive(Debug)]
pub struct TableView<'a, R> {
    rows: Vec<&'a R>,
    filtered: usize,
    total_pages: u32,
    window_start: usize,
}

impl<'a, R> TableView<'a, R> {
    /// Visible rows for the requested page.
    #[must_use]
    pub fn rows(&self) -> &[&'a R] {
        &self.rows
    }

    /// Count of records surviving the filter stage (all pages).
    #[must_use]
    pub const fn filtered(&self) -> usize {
        self.filtered
    }

    /// Total page count at the requested page size; zero when nothing
    /// matched.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 1-based inclusive range of the visible rows within the filtered
    /// set ("Showing X to Y of Z"), or None when the view is empty.
    #[must_use]
    pub fn showing_range(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }

        let start = self.window_start + 1;
        Some((start, self.window_start + self.rows.len()))
    }
}
