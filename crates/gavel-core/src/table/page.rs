use serde::Serialize;

///
/// PageRequest
///
/// 1-indexed page number plus page size. Zero values are caller-input
/// hygiene cases: a zero size clamps to one row per page and a zero page
/// to page 1, keeping the window math total.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct PageRequest {
    pub number: u32,
    pub size: u32,
}

impl PageRequest {
    pub const DEFAULT_SIZE: u32 = 10;

    #[must_use]
    pub const fn new(number: u32, size: u32) -> Self {
        Self { number, size }
    }

    /// First page at the given size.
    #[must_use]
    pub const fn first(size: u32) -> Self {
        Self { number: 1, size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(Self::DEFAULT_SIZE)
    }
}

///
/// PageWindow
///
/// Resolved slice bounds into the filtered, sorted row set.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PageWindow {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) total_pages: u32,
}

/// Resolve the page window over `filtered` rows.
///
/// `total_pages = ceil(filtered / size)`; zero matches mean zero pages. A
/// page past the end yields an empty window rather than an error.
pub(crate) fn window(page: &PageRequest, filtered: usize) -> PageWindow {
    let size = usize::try_from(page.size.max(1)).unwrap_or(usize::MAX);
    let number = usize::try_from(page.number.max(1)).unwrap_or(usize::MAX);

    let total_pages = u32::try_from(filtered.div_ceil(size)).unwrap_or(u32::MAX);
    let start = (number - 1).saturating_mul(size).min(filtered);
    let end = start.saturating_add(size).min(filtered);

    PageWindow {
        start,
        end,
        total_pages,
    }
}
