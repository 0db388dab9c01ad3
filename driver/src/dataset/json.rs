use std::fmt;
use std::path::{Path, PathBuf};

use error_stack::ResultExt;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::info;

use kernel::interface::source::CatalogSource;
use kernel::prelude::entity::{
    Author, AuthorId, AuthorName, Book, BookDescription, BookId, BookImage, BookTitle, Catalog,
    Genre, GenreId, GenreName, PublishedAt,
};
use kernel::KernelError;

use crate::error::ConvertError;

/// Loads the catalog from a JSON document on disk.
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse(bytes: &[u8]) -> error_stack::Result<Catalog, KernelError> {
        let document = serde_json::from_slice::<CatalogDocument>(bytes).convert_error()?;
        Catalog::try_from(document)
    }
}

#[async_trait::async_trait]
impl CatalogSource for JsonCatalogSource {
    async fn load(&self) -> error_stack::Result<Catalog, KernelError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to read {}", self.path.display()))?;
        let catalog = Self::parse(&bytes)
            .attach_printable_lazy(|| format!("Failed to parse {}", self.path.display()))?;
        info!(
            path = %self.path.display(),
            books = catalog.books().len(),
            authors = catalog.authors().len(),
            genres = catalog.genres().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    books: Vec<BookRecord>,
    #[serde(deserialize_with = "entries")]
    authors: Vec<(String, String)>,
    #[serde(deserialize_with = "entries")]
    genres: Vec<(String, String)>,
}

/// Reads a JSON object as its key/value pairs in document order. Repeated keys
/// are kept so that the catalog can reject them.
fn entries<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<(String, String)>, D::Error> {
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an object of id to display name")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, String>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

#[derive(Debug, Deserialize)]
struct BookRecord {
    id: String,
    title: String,
    author: String,
    image: String,
    published: PublishedAt,
    #[serde(default)]
    description: String,
    #[serde(default)]
    genres: Vec<String>,
}

impl From<BookRecord> for Book {
    fn from(value: BookRecord) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            AuthorId::new(value.author),
            BookImage::new(value.image),
            value.published,
            BookDescription::new(value.description),
            value.genres.into_iter().map(GenreId::new).collect(),
        )
    }
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = error_stack::Report<KernelError>;
    fn try_from(value: CatalogDocument) -> Result<Self, Self::Error> {
        let books = value.books.into_iter().map(Book::from).collect();
        let authors = value
            .authors
            .into_iter()
            .map(|(id, name)| Author::new(AuthorId::new(id), AuthorName::new(name)))
            .collect();
        let genres = value
            .genres
            .into_iter()
            .map(|(id, name)| Genre::new(GenreId::new(id), GenreName::new(name)))
            .collect();
        Catalog::new(books, authors, genres)
    }
}
