use crate::entity::{Book, PageIndex, PageSize};
use crate::search::{filter, page, remaining, FilterCriteria, Page};

/// Current match set and the last revealed page.
///
/// Transitions consume the state and return the next one; the owner decides
/// when `advance_page` is allowed (normally only while `remaining` is non-zero).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState<'a> {
    matches: Vec<&'a Book>,
    page: PageIndex,
}

impl<'a> QueryState<'a> {
    pub fn new(books: &'a [Book]) -> Self {
        Self {
            matches: books.iter().collect(),
            page: PageIndex::first(),
        }
    }

    pub fn apply_filter(self, books: &'a [Book], criteria: &FilterCriteria) -> Self {
        Self {
            matches: filter(books, criteria),
            page: PageIndex::first(),
        }
    }

    pub fn advance_page(self) -> Self {
        Self {
            page: self.page.next(),
            ..self
        }
    }

    pub fn matches(&self) -> &[&'a Book] {
        &self.matches
    }

    pub fn page_index(&self) -> PageIndex {
        self.page
    }

    pub fn current(&self, size: PageSize) -> Page<'_, &'a Book> {
        page(&self.matches, self.page, size)
    }

    pub fn remaining(&self, size: PageSize) -> usize {
        remaining(self.matches.len(), self.page, size)
    }
}

impl Default for QueryState<'_> {
    /// An empty match set on the first page.
    fn default() -> Self {
        Self {
            matches: Vec::new(),
            page: PageIndex::first(),
        }
    }
}
