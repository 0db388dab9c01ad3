use kernel::interface::search::FilterCriteria;
use kernel::prelude::entity::{Author, Book, BookId, PageIndex, PageSize};

/// A list entry: just enough to draw a preview card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
}

impl BookDto {
    pub fn new(book: &Book, author: &Author) -> Self {
        Self {
            id: book.id().as_ref().clone(),
            title: book.title().as_ref().clone(),
            author: author.name().as_ref().clone(),
            image: book.image().as_ref().clone(),
        }
    }
}

/// Everything the detail overlay shows for one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetailDto {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    pub published_year: i32,
}

impl BookDetailDto {
    pub fn new(book: &Book, author: &Author) -> Self {
        let year = book.published().year();
        let author: &String = author.name().as_ref();
        Self {
            id: book.id().as_ref().clone(),
            title: book.title().as_ref().clone(),
            subtitle: format!("{author} ({year})"),
            description: book.description().as_ref().clone(),
            image: book.image().as_ref().clone(),
            published_year: year,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchBookDto {
    pub criteria: FilterCriteria,
    pub page: PageIndex,
    pub size: PageSize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPageDto {
    pub books: Vec<BookDto>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub remaining: usize,
}

pub struct GetBookDto {
    pub id: BookId,
}
