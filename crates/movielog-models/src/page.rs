use serde::{Deserialize, Serialize};
use crate::movie::Movie;

/// Fixed listing page size
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_records: usize,
    pub per_page: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Metadata for `page` of a listing with `total_records` entries.
    ///
    /// `total_pages` is never below 1, so an empty listing still has page 1.
    pub fn new(page: usize, total_records: usize, per_page: usize) -> Self {
        let total_pages = total_records.div_ceil(per_page).max(1);
        Self {
            current_page: page,
            total_pages,
            total_records,
            per_page,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first record on the current page
    pub fn offset(&self) -> usize {
        self.current_page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

/// One page of the listing plus its metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    pub pagination: Pagination,
}
