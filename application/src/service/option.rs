use kernel::interface::query::{AuthorQuery, DependOnAuthorQuery, DependOnGenreQuery, GenreQuery};

use crate::transfer::OptionDto;

/// Entries for the author and genre dropdowns, in the order the dataset lists them.
pub trait GetOptionService: 'static + Sync + Send + DependOnAuthorQuery + DependOnGenreQuery {
    fn authors(&self) -> Vec<OptionDto> {
        self.author_query()
            .find_all()
            .iter()
            .map(OptionDto::from)
            .collect()
    }

    fn genres(&self) -> Vec<OptionDto> {
        self.genre_query()
            .find_all()
            .iter()
            .map(OptionDto::from)
            .collect()
    }
}

impl<T> GetOptionService for T where T: DependOnAuthorQuery + DependOnGenreQuery {}
