use kernel::interface::query::{AuthorQuery, BookQuery, GenreQuery};
use kernel::prelude::entity::{Author, AuthorId, Book, BookId, Catalog, Genre, GenreId};

/// Serves every lookup from a catalog held in memory for the life of the process.
pub struct StaticCatalogRepository {
    catalog: Catalog,
}

impl StaticCatalogRepository {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl BookQuery for StaticCatalogRepository {
    fn find_by_id(&self, id: &BookId) -> Option<&Book> {
        self.catalog.find_book(id)
    }

    fn find_all(&self) -> &[Book] {
        self.catalog.books()
    }
}

impl AuthorQuery for StaticCatalogRepository {
    fn find_by_id(&self, id: &AuthorId) -> Option<&Author> {
        self.catalog.find_author(id)
    }

    fn find_all(&self) -> &[Author] {
        self.catalog.authors()
    }
}

impl GenreQuery for StaticCatalogRepository {
    fn find_by_id(&self, id: &GenreId) -> Option<&Genre> {
        self.catalog.find_genre(id)
    }

    fn find_all(&self) -> &[Genre] {
        self.catalog.genres()
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::query::{AuthorQuery, BookQuery, GenreQuery};
    use kernel::prelude::entity::{AuthorId, BookId, GenreId};
    use kernel::KernelError;

    use super::StaticCatalogRepository;
    use crate::dataset::JsonCatalogSource;

    const DOCUMENT: &str = r#"{
        "books": [
            { "id": "1", "title": "One", "author": "a", "image": "i1",
              "published": "2001-01-01T00:00:00Z", "description": "d", "genres": ["g"] }
        ],
        "authors": { "a": "Ann" },
        "genres": { "g": "Fable" }
    }"#;

    #[test]
    fn lookups_delegate_to_catalog() -> error_stack::Result<(), KernelError> {
        let catalog = JsonCatalogSource::parse(DOCUMENT.as_bytes())?;
        let repository = StaticCatalogRepository::new(catalog);

        assert!(BookQuery::find_by_id(&repository, &BookId::new("1")).is_some());
        assert!(BookQuery::find_by_id(&repository, &BookId::new("2")).is_none());
        assert_eq!(BookQuery::find_all(&repository).len(), 1);

        assert!(AuthorQuery::find_by_id(&repository, &AuthorId::new("a")).is_some());
        assert_eq!(AuthorQuery::find_all(&repository).len(), 1);

        assert!(GenreQuery::find_by_id(&repository, &GenreId::new("x")).is_none());
        assert_eq!(GenreQuery::find_all(&repository).len(), 1);
        Ok(())
    }
}
