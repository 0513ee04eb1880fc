//! Incremental "load more" reveal over an ordered result list.

use crate::config::DEFAULT_PAGE_SIZE;

/// Tracks how many results are on screen.
///
/// The paginator does not own the results. Each call is checked against the
/// slice it is given, so a list that shrank since the last call never yields
/// out-of-range or repeated records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    displayed: usize,
    page_size: usize,
}

impl Paginator {
    /// Create a paginator. A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            displayed: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of results revealed so far.
    pub fn displayed(&self) -> usize {
        self.displayed
    }

    /// Start over from the first result.
    pub fn reset(&mut self) {
        self.displayed = 0;
    }

    /// Return the next page of `items` and advance past it.
    pub fn reveal_next<'a, T>(&mut self, items: &'a [T]) -> &'a [T] {
        let start = self.displayed.min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        self.displayed = end;
        &items[start..end]
    }

    /// Whether `reveal_next` would return anything for a list of `total`.
    pub fn has_more(&self, total: usize) -> bool {
        self.displayed < total
    }

    /// Everything revealed so far.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.displayed.min(items.len())]
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_pages() {
        let items: Vec<u32> = (0..5).collect();
        let mut pager = Paginator::new(2);

        assert_eq!(pager.reveal_next(&items), &[0, 1]);
        assert!(pager.has_more(items.len()));
        assert_eq!(pager.reveal_next(&items), &[2, 3]);
        assert_eq!(pager.reveal_next(&items), &[4]);
        assert!(!pager.has_more(items.len()));
        assert!(pager.reveal_next(&items).is_empty());
        assert_eq!(pager.displayed(), 5);
    }

    #[test]
    fn test_reset() {
        let items = [1, 2, 3];
        let mut pager = Paginator::new(2);
        pager.reveal_next(&items);
        pager.reset();
        assert_eq!(pager.displayed(), 0);
        assert_eq!(pager.reveal_next(&items), &[1, 2]);
    }

    #[test]
    fn test_shrunk_list_is_clamped() {
        let long: Vec<u32> = (0..10).collect();
        let mut pager = Paginator::new(4);
        pager.reveal_next(&long);
        pager.reveal_next(&long);

        let short = [0, 1, 2];
        assert!(pager.reveal_next(&short).is_empty());
        assert_eq!(pager.displayed(), 3);
        assert!(!pager.has_more(short.len()));
        assert_eq!(pager.visible(&short), &[0, 1, 2]);
    }

    #[test]
    fn test_zero_page_size_is_one() {
        let items = [7, 8];
        let mut pager = Paginator::new(0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.reveal_next(&items), &[7]);
    }

    #[test]
    fn test_default_page_size() {
        assert_eq!(Paginator::default().page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_visible_tracks_reveals() {
        let items: Vec<u32> = (0..5).collect();
        let mut pager = Paginator::new(3);
        assert!(pager.visible(&items).is_empty());
        pager.reveal_next(&items);
        assert_eq!(pager.visible(&items), &[0, 1, 2]);
    }
}
