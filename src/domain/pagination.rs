/// Rows shown per table page.
pub const PAGE_SIZE: usize = 5;

/// Client-side pagination over an in-memory collection.
///
/// Pages are 1-indexed. The current page stays inside
/// `[1, max(1, total_pages)]`; requests outside that range are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size: page_size.max(1) }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size)
    }

    /// Returns `false` (and leaves the page alone) when `page` is out of range.
    pub fn go_to_page(&mut self, page: usize, total_items: usize) -> bool {
        if page < 1 || page > self.total_pages(total_items) {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next(&mut self, total_items: usize) -> bool {
        self.go_to_page(self.page + 1, total_items)
    }

    pub fn prev(&mut self, total_items: usize) -> bool {
        match self.page.checked_sub(1) {
            Some(page) => self.go_to_page(page, total_items),
            None => false,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total_items: usize) -> bool {
        self.page < self.total_pages(total_items)
    }

    /// Pull the page back into range after the collection changed size.
    pub fn clamp(&mut self, total_items: usize) {
        let last = self.total_pages(total_items).max(1);
        self.page = self.page.clamp(1, last);
    }

    /// Items of the current page; shorter on the last page, empty if none.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_has_no_pages() {
        let mut paginator = Paginator::default();
        assert_eq!(paginator.total_pages(0), 0);
        assert!(!paginator.go_to_page(1, 0));
        assert_eq!(paginator.page(), 1);
        assert!(paginator.slice::<u8>(&[]).is_empty());
        assert!(!paginator.has_prev());
        assert!(!paginator.has_next(0));
    }

    #[test]
    fn clamp_after_shrink() {
        let mut paginator = Paginator::default();
        assert!(paginator.go_to_page(4, 20));
        paginator.clamp(7);
        assert_eq!(paginator.page(), 2);
        paginator.clamp(0);
        assert_eq!(paginator.page(), 1);
    }
}
