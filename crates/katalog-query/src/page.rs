// SPDX-License-Identifier: Apache-2.0

/// Maximum number of page controls rendered at once.
pub const PAGE_WINDOW: usize = 5;

/// Fixed page-size choices. `All` is the sentinel disabling pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Rows25,
    Rows50,
    Rows100,
    All,
}

impl PageSize {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "25" => Some(Self::Rows25),
            "50" => Some(Self::Rows50),
            "100" => Some(Self::Rows100),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// Rows per page; `None` for the show-all sentinel.
    #[must_use]
    pub const fn limit(self) -> Option<usize> {
        match self {
            Self::Rows25 => Some(25),
            Self::Rows50 => Some(50),
            Self::Rows100 => Some(100),
            Self::All => None,
        }
    }

    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Rows25 => "25",
            Self::Rows50 => "50",
            Self::Rows100 => "100",
            Self::All => "all",
        }
    }
}

/// Requested page position. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: PageSize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: PageSize::default(),
        }
    }
}

impl PageRequest {
    #[must_use]
    pub const fn first(size: PageSize) -> Self {
        Self { page: 1, size }
    }

    #[must_use]
    pub const fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// Changing the page size always returns to the first page, so a
    /// stale page number can never outlive a shrunken page count.
    #[must_use]
    pub const fn with_size(self, size: PageSize) -> Self {
        Self { page: 1, size }
    }
}

/// One rendered page of a sorted collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a, T> {
    pub rows: &'a [T],
    pub total: usize,
    pub total_pages: usize,
    pub numbers: Vec<usize>,
}

#[must_use]
pub fn total_pages(total: usize, size: PageSize) -> usize {
    match size.limit() {
        None => 1,
        Some(limit) => total.div_ceil(limit),
    }
}

/// Slice the window for `request` out of the sorted collection. Total
/// over any input: an out-of-range page yields an empty window, never an
/// out-of-bounds slice.
#[must_use]
pub fn paginate<'a, T>(rows: &'a [T], request: &PageRequest) -> PageView<'a, T> {
    let total = rows.len();
    let pages = total_pages(total, request.size);
    let window = match request.size.limit() {
        None => rows,
        Some(limit) => {
            let start = request
                .page
                .saturating_sub(1)
                .saturating_mul(limit)
                .min(total);
            let end = start.saturating_add(limit).min(total);
            &rows[start..end]
        }
    };
    PageView {
        rows: window,
        total,
        total_pages: pages,
        numbers: page_numbers(pages, request.page),
    }
}

/// Page numbers to render as controls: at most [`PAGE_WINDOW`] entries,
/// centered on the current page where possible and sliding at the
/// boundaries so every produced number stays in `[1, total_pages]`.
#[must_use]
pub fn page_numbers(total_pages: usize, current: usize) -> Vec<usize> {
    if total_pages <= PAGE_WINDOW {
        return (1..=total_pages).collect();
    }
    let current = current.min(total_pages);
    let half = PAGE_WINDOW / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = start.saturating_add(PAGE_WINDOW - 1).min(total_pages);
    if end - start < PAGE_WINDOW - 1 {
        start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
    }
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_always_yields_one_page() {
        let rows: Vec<u32> = (0..7).collect();
        let view = paginate(&rows, &PageRequest::first(PageSize::All));
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.rows.len(), 7);
        assert_eq!(view.numbers, vec![1]);

        let empty: Vec<u32> = Vec::new();
        let view = paginate(&empty, &PageRequest::first(PageSize::All));
        assert_eq!(view.total_pages, 1);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let rows: Vec<u32> = Vec::new();
        let view = paginate(&rows, &PageRequest::first(PageSize::Rows25));
        assert_eq!(view.total_pages, 0);
        assert!(view.rows.is_empty());
        assert!(view.numbers.is_empty());
    }

    #[test]
    fn window_slices_after_the_page_boundary() {
        let rows: Vec<u32> = (1..=120).collect();
        let view = paginate(&rows, &PageRequest::first(PageSize::Rows50).with_page(3));
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.rows.len(), 20);
        assert_eq!(view.rows.first(), Some(&101));
        assert_eq!(view.rows.last(), Some(&120));
        assert_eq!(view.numbers, vec![1, 2, 3]);
    }

    #[test]
    fn out_of_range_page_yields_empty_window() {
        let rows: Vec<u32> = (1..=30).collect();
        let view = paginate(&rows, &PageRequest::first(PageSize::Rows25).with_page(9));
        assert!(view.rows.is_empty());
        assert_eq!(view.total, 30);
        assert_eq!(view.total_pages, 2);
    }

    #[test]
    fn with_size_resets_to_first_page() {
        let request = PageRequest::first(PageSize::Rows25).with_page(4);
        let resized = request.with_size(PageSize::Rows100);
        assert_eq!(resized.page, 1);
        assert_eq!(resized.size, PageSize::Rows100);
    }

    #[test]
    fn page_number_window_slides_and_clamps() {
        assert_eq!(page_numbers(1, 1), vec![1]);
        assert_eq!(page_numbers(3, 2), vec![1, 2, 3]);
        assert_eq!(page_numbers(20, 1), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(20, 20), vec![16, 17, 18, 19, 20]);
        assert_eq!(page_numbers(12, 9), vec![7, 8, 9, 10, 11]);
        assert_eq!(page_numbers(0, 1), Vec::<usize>::new());
    }

    #[test]
    fn page_number_window_clamps_an_out_of_range_current_page() {
        assert_eq!(page_numbers(6, 9), vec![2, 3, 4, 5, 6]);
        assert_eq!(page_numbers(3, 9), vec![1, 2, 3]);
    }

    #[test]
    fn page_size_parses_fixed_choices_only() {
        assert_eq!(PageSize::parse("25"), Some(PageSize::Rows25));
        assert_eq!(PageSize::parse("all"), Some(PageSize::All));
        assert_eq!(PageSize::parse("30"), None);
        assert_eq!(PageSize::parse(""), None);
    }
}
