use error_stack::Report;
use tracing::debug;

use kernel::interface::query::{AuthorQuery, BookQuery, DependOnAuthorQuery, DependOnBookQuery};
use kernel::interface::search::{filter, page};
use kernel::prelude::entity::{Author, Book};
use kernel::KernelError;

use crate::transfer::{BookDetailDto, BookDto, BookPageDto, GetBookDto, SearchBookDto};

pub(crate) fn author_of<'a, Q: AuthorQuery>(
    authors: &'a Q,
    book: &Book,
) -> error_stack::Result<&'a Author, KernelError> {
    authors.find_by_id(book.author()).ok_or_else(|| {
        Report::new(KernelError::Internal).attach_printable(format!(
            "book `{}` refers to missing author `{}`",
            book.id().as_ref(),
            book.author().as_ref()
        ))
    })
}

pub trait SearchBookService: 'static + Sync + Send + DependOnBookQuery + DependOnAuthorQuery {
    fn search_books(&self, dto: SearchBookDto) -> error_stack::Result<BookPageDto, KernelError> {
        let matches = filter(self.book_query().find_all(), &dto.criteria);
        let current = page(&matches, dto.page, dto.size);
        debug!(
            criteria = ?dto.criteria,
            page = dto.page.get(),
            total = matches.len(),
            remaining = current.remaining(),
            "search books"
        );

        let books = current
            .items()
            .iter()
            .map(|book| -> error_stack::Result<BookDto, KernelError> {
                Ok(BookDto::new(book, author_of(self.author_query(), book)?))
            })
            .collect::<error_stack::Result<Vec<_>, KernelError>>()?;

        Ok(BookPageDto {
            books,
            page: dto.page.get(),
            page_size: dto.size.get(),
            total: matches.len(),
            remaining: current.remaining(),
        })
    }
}

impl<T> SearchBookService for T where T: DependOnBookQuery + DependOnAuthorQuery {}

pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery + DependOnAuthorQuery {
    fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDetailDto>, KernelError> {
        let Some(book) = self.book_query().find_by_id(&dto.id) else {
            debug!(id = ?dto.id, "book not found");
            return Ok(None);
        };
        let author = author_of(self.author_query(), book)?;
        Ok(Some(BookDetailDto::new(book, author)))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery + DependOnAuthorQuery {}
