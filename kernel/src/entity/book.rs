mod description;
mod id;
mod image;
mod published;
mod title;

pub use self::{description::*, id::*, image::*, published::*, title::*};
use crate::entity::{AuthorId, GenreId};
use destructure::Destructure;
use vodca::References;

/// A single catalog entry. Books are loaded once and never mutated afterwards.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: AuthorId,
    image: BookImage,
    published: PublishedAt,
    description: BookDescription,
    genres: Vec<GenreId>,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: AuthorId,
        image: BookImage,
        published: PublishedAt,
        description: BookDescription,
        genres: Vec<GenreId>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            image,
            published,
            description,
            genres,
        }
    }

    pub fn has_genre(&self, genre: &GenreId) -> bool {
        self.genres.contains(genre)
    }
}
