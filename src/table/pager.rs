//! Pagination engine: pure page arithmetic over the filtered sequence.
//!
//! All inputs are clamped rather than rejected, so an out-of-range page after
//! a filter shrinks the result set lands on a valid page instead of erroring.

/// Result of paginating a sequence: the clamped current page, the derived
/// total, and the half-open slice bounds `[start, end)` of the page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub current_page: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

/// Navigation intents, resolved to a requested page before re-paginating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    First,
    Prev,
    Next,
    Last,
    Jump(usize),
}

impl PageRequest {
    /// Pure transformation of the current page into a requested page.
    ///
    /// Prev at page 1 and Next at the last page are no-ops; the result is
    /// still clamped by [`paginate`], so Jump may return anything.
    pub fn resolve(self, current_page: usize, total_pages: usize) -> usize {
        match self {
            PageRequest::First => 1,
            PageRequest::Prev => current_page.saturating_sub(1).max(1),
            PageRequest::Next => (current_page + 1).min(total_pages),
            PageRequest::Last => total_pages,
            PageRequest::Jump(page) => page,
        }
    }
}

/// `max(1, ceil(len / page_size))`; an empty sequence still has one page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0);
    (len.div_ceil(page_size)).max(1)
}

/// Compute the page bounds for a sequence of `len` records.
///
/// The requested page is clamped into `[1, total_pages]`; the returned slice
/// bounds are always valid for the sequence (possibly empty).
pub fn paginate(len: usize, page_size: usize, requested_page: usize) -> PageBounds {
    let total = total_pages(len, page_size);
    let current = requested_page.clamp(1, total);
    let start = ((current - 1) * page_size).min(len);
    let end = (start + page_size).min(len);
    PageBounds {
        current_page: current,
        total_pages: total,
        start,
        end,
    }
}

/// The sliding window of page numbers shown in the pagination controls.
///
/// At most `width` consecutive pages, centered on the current page where
/// possible, pulled back inside `[1, total_pages]` at either edge. The
/// current page is always inside the window.
pub fn page_window(current_page: usize, total_pages: usize, width: usize) -> Vec<usize> {
    debug_assert!(width > 0);
    let start = current_page.saturating_sub(width / 2).max(1);
    let mut end = start + width - 1;
    let start = if end > total_pages {
        end = total_pages;
        end.saturating_sub(width - 1).max(1)
    } else {
        start
    };
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_total_pages_never_zero() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn test_paginate_slices_full_and_partial_pages() {
        let bounds = paginate(12, 10, 1);
        assert_eq!(bounds.current_page, 1);
        assert_eq!(bounds.total_pages, 2);
        assert_eq!((bounds.start, bounds.end), (0, 10));

        let bounds = paginate(12, 10, 2);
        assert_eq!((bounds.start, bounds.end), (10, 12));
    }

    #[test]
    fn test_paginate_clamps_out_of_range_requests() {
        let bounds = paginate(12, 10, 99);
        assert_eq!(bounds.current_page, 2);

        let bounds = paginate(12, 10, 0);
        assert_eq!(bounds.current_page, 1);

        // Empty sequence: one page, empty slice
        let bounds = paginate(0, 10, 3);
        assert_eq!(bounds.current_page, 1);
        assert_eq!(bounds.total_pages, 1);
        assert_eq!((bounds.start, bounds.end), (0, 0));
    }

    #[test]
    fn test_paginate_is_idempotent() {
        let first = paginate(57, 10, 4);
        let second = paginate(57, 10, 4);
        assert_eq!(first, second);
    }

    #[test]
    fn test_navigation_requests() {
        assert_eq!(PageRequest::First.resolve(3, 5), 1);
        assert_eq!(PageRequest::Prev.resolve(3, 5), 2);
        assert_eq!(PageRequest::Prev.resolve(1, 5), 1);
        assert_eq!(PageRequest::Next.resolve(3, 5), 4);
        assert_eq!(PageRequest::Next.resolve(5, 5), 5);
        assert_eq!(PageRequest::Last.resolve(1, 5), 5);
        assert_eq!(PageRequest::Jump(4).resolve(1, 5), 4);
    }

    #[test]
    fn test_page_window_centers_on_current() {
        assert_eq!(page_window(5, 9, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_page_window_clamps_at_edges() {
        assert_eq!(page_window(1, 9, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 9, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(9, 9, 5), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_window(8, 9, 5), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_page_window_short_totals() {
        assert_eq!(page_window(1, 1, 5), vec![1]);
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
    }

    proptest! {
        #[test]
        fn prop_current_page_always_in_range(
            len in 0usize..10_000,
            page_size in 1usize..100,
            requested in 0usize..20_000,
        ) {
            let bounds = paginate(len, page_size, requested);
            prop_assert!(bounds.current_page >= 1);
            prop_assert!(bounds.current_page <= bounds.total_pages);
            prop_assert!(bounds.start <= bounds.end);
            prop_assert!(bounds.end <= len);
            prop_assert!(bounds.end - bounds.start <= page_size);
        }

        #[test]
        fn prop_window_width_and_membership(
            current in 1usize..500,
            total in 1usize..500,
            width in 1usize..10,
        ) {
            let current = current.min(total);
            let window = page_window(current, total, width);
            prop_assert_eq!(window.len(), total.min(width));
            prop_assert!(window.contains(&current));
            prop_assert!(window.iter().all(|&p| p >= 1 && p <= total));
            // Window pages are consecutive
            prop_assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
        }
    }
}
