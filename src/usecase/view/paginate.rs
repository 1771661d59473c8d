use std::ops::Range;

use crate::domain::entities::view::PageState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub total_pages: usize,
    pub range: Range<usize>,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageWindow {
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Keeps the page inside `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(len, page_size).max(1))
}

pub fn paginate(len: usize, state: PageState) -> PageWindow {
    let size = state.size.max(1);
    let total_pages = total_pages(len, size);
    let page = clamp_page(state.current, len, size);
    let start = ((page - 1) * size).min(len);
    let end = (page * size).min(len);

    PageWindow {
        page,
        total_pages,
        range: start..end,
        has_prev: page > 1,
        has_next: page < total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(current: usize, size: usize) -> PageState {
        PageState { current, size }
    }

    #[test]
    fn first_page_of_twenty_five() {
        let window = paginate(25, page(1, 10));
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.range, 0..10);
        assert!(!window.has_prev);
        assert!(window.has_next);
        assert_eq!(window.label(), "Page 1 of 3");
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let window = paginate(25, page(3, 10));
        assert_eq!(window.range.len(), 5);
        assert!(window.has_prev);
        assert!(!window.has_next);

        let even = paginate(30, page(3, 10));
        assert_eq!(even.range.len(), 10);
        assert!(!even.has_next);
    }

    #[test]
    fn empty_view_reports_page_one_of_zero() {
        let window = paginate(0, page(1, 10));
        assert_eq!(window.total_pages, 0);
        assert_eq!(window.range, 0..0);
        assert!(!window.has_prev);
        assert!(!window.has_next);
        assert_eq!(window.label(), "Page 1 of 0");
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let window = paginate(12, page(9, 10));
        assert_eq!(window.page, 2);
        assert_eq!(window.range, 10..12);
        assert_eq!(clamp_page(0, 12, 10), 1);
    }
}
