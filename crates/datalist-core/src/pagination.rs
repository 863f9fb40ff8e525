use crate::error::DataListError;

/// Returns the `page`-th window of `rows_per_page` items.
///
/// Out-of-range pages yield an empty slice; a final partial page yields only the remaining items.
pub fn paginate<T>(items: &[T], page: usize, rows_per_page: usize) -> &[T] {
    let start = page.saturating_mul(rows_per_page).min(items.len());
    let end = start.saturating_add(rows_per_page).min(items.len());
    &items[start..end]
}

/// Page / page-size state for a paginated table.
///
/// The page index is never clamped against the data length: navigation past the last page is
/// prevented by the pagination control, and [`paginate`] handles stray indices by returning an
/// empty slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    rows_per_page: usize,
    initial_rows_per_page: usize,
    options: Vec<usize>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            rows_per_page: 50,
            initial_rows_per_page: 50,
            options: vec![10, 50, 100],
        }
    }
}

impl Pagination {
    /// Creates the state machine with `options` as the allowed page sizes.
    pub fn new(options: Vec<usize>, initial_rows_per_page: usize) -> Result<Self, DataListError> {
        if options.is_empty() {
            return Err(DataListError::EmptyRowsPerPageOptions);
        }
        if options.contains(&0) || initial_rows_per_page == 0 {
            return Err(DataListError::ZeroRowsPerPage);
        }
        if !options.contains(&initial_rows_per_page) {
            return Err(DataListError::RowsPerPageNotAllowed(initial_rows_per_page));
        }
        Ok(Self {
            page: 0,
            rows_per_page: initial_rows_per_page,
            initial_rows_per_page,
            options,
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn options(&self) -> &[usize] {
        &self.options
    }

    pub fn change_page(&mut self, page: usize) {
        if page != self.page {
            log::debug!("[pagination] page {} -> {}", self.page, page);
        }
        self.page = page;
    }

    /// Switches the page size and goes back to the first page.
    pub fn change_rows_per_page(&mut self, rows_per_page: usize) -> Result<(), DataListError> {
        if rows_per_page == 0 {
            return Err(DataListError::ZeroRowsPerPage);
        }
        if !self.options.contains(&rows_per_page) {
            return Err(DataListError::RowsPerPageNotAllowed(rows_per_page));
        }
        log::debug!(
            "[pagination] rows per page {} -> {} (page {} -> 0)",
            self.rows_per_page,
            rows_per_page,
            self.page
        );
        self.rows_per_page = rows_per_page;
        self.page = 0;
        Ok(())
    }

    /// Next allowed page size after the current one, wrapping around.
    pub fn next_rows_per_page(&self) -> usize {
        let i = self
            .options
            .iter()
            .position(|&n| n == self.rows_per_page)
            .map(|i| (i + 1) % self.options.len())
            .unwrap_or(0);
        self.options[i]
    }

    /// Previous allowed page size before the current one, wrapping around.
    pub fn prev_rows_per_page(&self) -> usize {
        let len = self.options.len();
        let i = self
            .options
            .iter()
            .position(|&n| n == self.rows_per_page)
            .map(|i| (i + len - 1) % len)
            .unwrap_or(0);
        self.options[i]
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.page, self.rows_per_page)
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.rows_per_page)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page.saturating_add(1) < self.page_count(total)
    }

    /// `"first–last of total"`, with 1-based inclusive bounds; `"0–0 of 0"` when empty.
    pub fn range_label(&self, total: usize) -> String {
        let start = self.page.saturating_mul(self.rows_per_page);
        if total == 0 || start >= total {
            return format!("0–0 of {total}");
        }
        let end = (start + self.rows_per_page).min(total);
        format!("{}–{} of {}", start + 1, end, total)
    }

    /// Back to page 0 with the initial page size.
    pub fn reset(&mut self) {
        self.page = 0;
        self.rows_per_page = self.initial_rows_per_page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_is_partial() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(paginate(&items, 2, 10), &[20, 21, 22, 23, 24]);
        assert_eq!(paginate(&items, 0, 10).len(), 10);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items: Vec<usize> = (0..25).collect();
        assert!(paginate(&items, 3, 10).is_empty());
        assert!(paginate(&items, usize::MAX, 10).is_empty());
        assert!(paginate::<usize>(&[], 0, 10).is_empty());
    }

    #[test]
    fn changing_rows_per_page_resets_page() {
        let mut p = Pagination::new(vec![10, 50, 100], 10).unwrap();
        p.change_page(3);
        assert_eq!(p.page(), 3);
        p.change_rows_per_page(50).unwrap();
        assert_eq!(p.page(), 0);
        assert_eq!(p.rows_per_page(), 50);
    }

    #[test]
    fn change_page_does_not_clamp() {
        let mut p = Pagination::new(vec![10], 10).unwrap();
        p.change_page(42);
        assert_eq!(p.page(), 42);
        assert!(p.slice(&[1, 2, 3]).is_empty());
        assert_eq!(p.range_label(3), "0–0 of 3");
    }

    #[test]
    fn bounds_hold_at_the_largest_page() {
        let mut p = Pagination::new(vec![10], 10).unwrap();
        p.change_page(usize::MAX);
        assert!(!p.has_next(3));
        assert!(p.has_prev());
        assert_eq!(p.range_label(3), "0–0 of 3");
    }

    #[test]
    fn rejects_sizes_outside_the_allowed_set() {
        assert_eq!(
            Pagination::new(vec![], 10),
            Err(DataListError::EmptyRowsPerPageOptions)
        );
        assert_eq!(
            Pagination::new(vec![10, 50], 25),
            Err(DataListError::RowsPerPageNotAllowed(25))
        );
        let mut p = Pagination::new(vec![10, 50], 10).unwrap();
        p.change_page(2);
        assert_eq!(
            p.change_rows_per_page(0),
            Err(DataListError::ZeroRowsPerPage)
        );
        assert_eq!(p.page(), 2);
    }

    #[test]
    fn range_label_and_bounds() {
        let mut p = Pagination::new(vec![10], 10).unwrap();
        assert_eq!(p.range_label(12), "1–10 of 12");
        assert!(p.has_next(12));
        assert!(!p.has_prev());
        p.change_page(1);
        assert_eq!(p.range_label(12), "11–12 of 12");
        assert!(!p.has_next(12));
        assert!(p.has_prev());
    }

    #[test]
    fn rows_per_page_cycles() {
        let p = Pagination::new(vec![10, 50, 100], 100).unwrap();
        assert_eq!(p.next_rows_per_page(), 10);
        assert_eq!(p.prev_rows_per_page(), 50);
    }
}
