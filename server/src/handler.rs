use driver::dataset::StaticCatalogRepository;
use kernel::interface::query::{DependOnAuthorQuery, DependOnBookQuery, DependOnGenreQuery};
use kernel::interface::source::CatalogSource;
use kernel::prelude::entity::{Catalog, PageSize};
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new(
        source: &impl CatalogSource,
        page_size: PageSize,
    ) -> error_stack::Result<Self, KernelError> {
        Ok(Self::from_catalog(source.load().await?, page_size))
    }

    pub fn from_catalog(catalog: Catalog, page_size: PageSize) -> Self {
        Self(Arc::new(Handler::init(catalog, page_size)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    repository: StaticCatalogRepository,
    page_size: PageSize,
}

impl Handler {
    pub fn init(catalog: Catalog, page_size: PageSize) -> Self {
        Self {
            repository: StaticCatalogRepository::new(catalog),
            page_size,
        }
    }
}

impl DependOnBookQuery for Handler {
    type BookQuery = StaticCatalogRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &self.repository
    }
}

impl DependOnAuthorQuery for Handler {
    type AuthorQuery = StaticCatalogRepository;
    fn author_query(&self) -> &Self::AuthorQuery {
        &self.repository
    }
}

impl DependOnGenreQuery for Handler {
    type GenreQuery = StaticCatalogRepository;
    fn genre_query(&self) -> &Self::GenreQuery {
        &self.repository
    }
}
