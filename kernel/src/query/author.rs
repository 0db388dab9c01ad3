use crate::entity::{Author, AuthorId};

pub trait AuthorQuery: Sync + Send + 'static {
    fn find_by_id(&self, id: &AuthorId) -> Option<&Author>;
    fn find_all(&self) -> &[Author];
}

pub trait DependOnAuthorQuery: Sync + Send + 'static {
    type AuthorQuery: AuthorQuery;
    fn author_query(&self) -> &Self::AuthorQuery;
}
