use crate::controller::{Intake, TryIntake};
use application::transfer::{GetBookDto, SearchBookDto};
use error_stack::Report;
use kernel::interface::search::FilterCriteria;
use kernel::prelude::entity::{AuthorId, BookId, GenreId, PageIndex, PageSize};
use kernel::KernelError;
use serde::Deserialize;

/// Dropdown value meaning "no constraint on this dimension".
const ANY: &str = "any";

#[derive(Debug, Default, Deserialize)]
pub struct SearchBookRequest {
    title: Option<String>,
    author: Option<String>,
    genre: Option<String>,
    page: Option<usize>,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: String,
}

impl GetBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

fn selection(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty() && value != ANY)
}

pub struct BookTransformer {
    page_size: PageSize,
}

impl BookTransformer {
    pub fn new(page_size: PageSize) -> Self {
        Self { page_size }
    }
}

impl TryIntake<SearchBookRequest> for BookTransformer {
    type To = SearchBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: SearchBookRequest) -> Result<Self::To, Self::Error> {
        let page = match input.page {
            Some(page) => PageIndex::try_from(page)?,
            None => PageIndex::first(),
        };
        let criteria = FilterCriteria::new(
            input.title,
            selection(input.author).map(AuthorId::new),
            selection(input.genre).map(GenreId::new),
        );
        Ok(SearchBookDto {
            criteria,
            page,
            size: self.page_size,
        })
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto {
            id: BookId::new(input.id),
        }
    }
}
