use crate::entity::{Book, BookId};

/// Read access to the loaded book collection. Lookups never fail; a missing
/// id is reported as `None`.
pub trait BookQuery: Sync + Send + 'static {
    fn find_by_id(&self, id: &BookId) -> Option<&Book>;
    fn find_all(&self) -> &[Book];
}

pub trait DependOnBookQuery: Sync + Send + 'static {
    type BookQuery: BookQuery;
    fn book_query(&self) -> &Self::BookQuery;
}
