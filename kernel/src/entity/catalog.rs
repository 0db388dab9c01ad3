use std::collections::{HashMap, HashSet};

use error_stack::Report;

use crate::entity::{Author, AuthorId, Book, BookId, Genre, GenreId};
use crate::KernelError;

/// The full, immutable dataset: every book plus the author and genre lookups
/// the books refer to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
    authors: Vec<Author>,
    genres: Vec<Genre>,
    author_index: HashMap<AuthorId, usize>,
    genre_index: HashMap<GenreId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and dangling author/genre references.
    /// Books, authors and genres all keep the order they were given in.
    pub fn new(
        books: Vec<Book>,
        authors: Vec<Author>,
        genres: Vec<Genre>,
    ) -> error_stack::Result<Self, KernelError> {
        let mut author_index = HashMap::with_capacity(authors.len());
        for (at, author) in authors.iter().enumerate() {
            if author_index.insert(author.id().clone(), at).is_some() {
                return Err(Report::new(KernelError::InvalidData).attach_printable(format!(
                    "duplicate author id `{}`",
                    author.id().as_ref()
                )));
            }
        }
        let mut genre_index = HashMap::with_capacity(genres.len());
        for (at, genre) in genres.iter().enumerate() {
            if genre_index.insert(genre.id().clone(), at).is_some() {
                return Err(Report::new(KernelError::InvalidData).attach_printable(format!(
                    "duplicate genre id `{}`",
                    genre.id().as_ref()
                )));
            }
        }

        let mut book_ids = HashSet::with_capacity(books.len());
        for book in &books {
            let id: &String = book.id().as_ref();
            if !book_ids.insert(book.id()) {
                return Err(Report::new(KernelError::InvalidData)
                    .attach_printable(format!("duplicate book id `{id}`")));
            }
            if !author_index.contains_key(book.author()) {
                return Err(Report::new(KernelError::InvalidData).attach_printable(format!(
                    "book `{id}` refers to unknown author `{}`",
                    book.author().as_ref()
                )));
            }
            if let Some(genre) = book.genres().iter().find(|g| !genre_index.contains_key(*g)) {
                return Err(Report::new(KernelError::InvalidData).attach_printable(format!(
                    "book `{id}` refers to unknown genre `{}`",
                    genre.as_ref()
                )));
            }
        }

        Ok(Self {
            books,
            authors,
            genres,
            author_index,
            genre_index,
        })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn find_book(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == id)
    }

    pub fn find_author(&self, id: &AuthorId) -> Option<&Author> {
        self.author_index.get(id).map(|&at| &self.authors[at])
    }

    pub fn find_genre(&self, id: &GenreId) -> Option<&Genre> {
        self.genre_index.get(id).map(|&at| &self.genres[at])
    }
}
