use crate::entity::{AuthorId, Book, GenreId};

/// Constraints for one search. Every field is optional; an absent field
/// (or an empty title) places no constraint on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    title: Option<String>,
    author: Option<AuthorId>,
    genre: Option<GenreId>,
}

impl FilterCriteria {
    pub fn new(title: Option<String>, author: Option<AuthorId>, genre: Option<GenreId>) -> Self {
        Self {
            title,
            author,
            genre,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: AuthorId) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_genre(mut self, genre: GenreId) -> Self {
        self.genre = Some(genre);
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }

    pub fn author(&self) -> Option<&AuthorId> {
        self.author.as_ref()
    }

    pub fn genre(&self) -> Option<&GenreId> {
        self.genre.as_ref()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.title().is_none() && self.author.is_none() && self.genre.is_none()
    }

    pub(crate) fn matcher(&self) -> Matcher<'_> {
        Matcher {
            title: self.title().map(str::to_lowercase),
            author: self.author(),
            genre: self.genre(),
        }
    }
}

/// Criteria prepared for repeated evaluation: the title needle is folded once.
pub(crate) struct Matcher<'c> {
    title: Option<String>,
    author: Option<&'c AuthorId>,
    genre: Option<&'c GenreId>,
}

impl Matcher<'_> {
    pub(crate) fn matches(&self, book: &Book) -> bool {
        if let Some(title) = &self.title {
            if !book.title().contains_folded(title) {
                return false;
            }
        }
        if let Some(author) = self.author {
            if book.author() != author {
                return false;
            }
        }
        if let Some(genre) = self.genre {
            if !book.has_genre(genre) {
                return false;
            }
        }
        true
    }
}
