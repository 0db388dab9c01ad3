use tracing::debug;

use kernel::interface::query::{BookQuery, DependOnAuthorQuery, DependOnBookQuery};
use kernel::interface::search::{FilterCriteria, QueryState};
use kernel::prelude::entity::{BookId, PageSize};
use kernel::KernelError;

use crate::service::book::author_of;
use crate::service::GetBookService;
use crate::transfer::{BookDetailDto, BookDto, GetBookDto};

/// Presentation capabilities the browse session drives.
///
/// A renderer turns list entries into handles of its own choosing and later maps
/// a selected handle back to the book it was drawn for.
pub trait Renderer {
    type Handle;

    /// Drops every rendered list entry.
    fn clear(&mut self);
    /// Appends one entry to the list.
    fn render(&mut self, book: BookDto) -> Self::Handle;
    fn resolve(&self, handle: &Self::Handle) -> Option<BookId>;
    /// Toggles the "no results" message.
    fn empty(&mut self, is_empty: bool);
    /// Updates the "show more" control; zero means it should be disabled.
    fn remaining(&mut self, remaining: usize);
    fn detail(&mut self, detail: BookDetailDto);
}

/// Owns the query state of one browsing session and pushes every change to a renderer.
pub struct BrowseSession<'a, M, R> {
    module: &'a M,
    state: QueryState<'a>,
    size: PageSize,
    renderer: R,
}

impl<'a, M, R> BrowseSession<'a, M, R>
where
    M: DependOnBookQuery + DependOnAuthorQuery,
    R: Renderer,
{
    pub fn new(module: &'a M, size: PageSize, renderer: R) -> Self {
        Self {
            module,
            state: QueryState::new(module.book_query().find_all()),
            size,
            renderer,
        }
    }

    /// Draws the first page of the unfiltered collection.
    pub fn start(&mut self) -> error_stack::Result<Vec<R::Handle>, KernelError> {
        self.renderer.clear();
        self.renderer.empty(self.state.matches().is_empty());
        self.reveal()
    }

    /// Replaces the match set and redraws from the first page.
    pub fn apply_filter(
        &mut self,
        criteria: &FilterCriteria,
    ) -> error_stack::Result<Vec<R::Handle>, KernelError> {
        let books = self.module.book_query().find_all();
        let state = std::mem::take(&mut self.state);
        self.state = state.apply_filter(books, criteria);
        debug!(?criteria, matches = self.state.matches().len(), "filter applied");

        self.renderer.clear();
        self.renderer.empty(self.state.matches().is_empty());
        self.reveal()
    }

    /// Appends the next page. Returns `None` without touching anything when
    /// every match is already shown.
    pub fn show_more(&mut self) -> error_stack::Result<Option<Vec<R::Handle>>, KernelError> {
        if self.remaining() == 0 {
            return Ok(None);
        }
        let state = std::mem::take(&mut self.state);
        self.state = state.advance_page();
        debug!(page = self.state.page_index().get(), "show more");
        self.reveal().map(Some)
    }

    /// Opens the detail view for the entry behind `handle`. Unknown handles and
    /// ids are ignored and reported as `false`.
    pub fn select(&mut self, handle: &R::Handle) -> error_stack::Result<bool, KernelError> {
        let Some(id) = self.renderer.resolve(handle) else {
            return Ok(false);
        };
        match self.module.get_book(GetBookDto { id })? {
            Some(detail) => {
                self.renderer.detail(detail);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn remaining(&self) -> usize {
        self.state.remaining(self.size)
    }

    pub fn state(&self) -> &QueryState<'a> {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn reveal(&mut self) -> error_stack::Result<Vec<R::Handle>, KernelError> {
        let current = self.state.current(self.size);
        let mut handles = Vec::with_capacity(current.items().len());
        for book in current.items() {
            let author = author_of(self.module.author_query(), book)?;
            handles.push(self.renderer.render(BookDto::new(book, author)));
        }
        self.renderer.remaining(current.remaining());
        Ok(handles)
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::search::FilterCriteria;
    use kernel::prelude::entity::{AuthorId, BookId, PageSize};
    use kernel::KernelError;

    use super::{BrowseSession, Renderer};
    use crate::service::test::Shelf;
    use crate::transfer::{BookDetailDto, BookDto};

    #[derive(Debug, Default)]
    struct Recorder {
        list: Vec<BookDto>,
        empty: bool,
        remaining: Option<usize>,
        detail: Option<BookDetailDto>,
    }

    impl Recorder {
        fn titles(&self) -> Vec<&str> {
            self.list.iter().map(|book| book.title.as_str()).collect()
        }
    }

    impl Renderer for Recorder {
        type Handle = String;

        fn clear(&mut self) {
            self.list.clear();
        }

        fn render(&mut self, book: BookDto) -> Self::Handle {
            let handle = format!("preview-{}", book.id);
            self.list.push(book);
            handle
        }

        fn resolve(&self, handle: &Self::Handle) -> Option<BookId> {
            handle.strip_prefix("preview-").map(BookId::new)
        }

        fn empty(&mut self, is_empty: bool) {
            self.empty = is_empty;
        }

        fn remaining(&mut self, remaining: usize) {
            self.remaining = Some(remaining);
        }

        fn detail(&mut self, detail: BookDetailDto) {
            self.detail = Some(detail);
        }
    }

    fn two() -> PageSize {
        PageSize::try_from(2).unwrap()
    }

    #[test]
    fn start_and_show_more_until_exhausted() -> error_stack::Result<(), KernelError> {
        let shelf = Shelf::new();
        let mut session = BrowseSession::new(&shelf, two(), Recorder::default());

        let handles = session.start()?;
        assert_eq!(handles, vec!["preview-1", "preview-2"]);
        assert_eq!(session.renderer().remaining, Some(3));
        assert!(!session.renderer().empty);

        assert!(session.show_more()?.is_some());
        assert!(session.show_more()?.is_some());
        assert_eq!(
            session.renderer().titles(),
            vec!["A Tale", "Book B", "Another A", "C Story", "A Second"]
        );
        assert_eq!(session.remaining(), 0);
        assert_eq!(session.renderer().remaining, Some(0));

        assert!(session.show_more()?.is_none());
        assert_eq!(session.state().page_index().get(), 3);
        Ok(())
    }

    #[test]
    fn filter_clears_and_restarts() -> error_stack::Result<(), KernelError> {
        let shelf = Shelf::new();
        let mut session = BrowseSession::new(&shelf, two(), Recorder::default());
        session.start()?;
        session.show_more()?;

        session.apply_filter(&FilterCriteria::default().with_title("a"))?;
        assert_eq!(session.renderer().titles(), vec!["A Tale", "Another A"]);
        assert_eq!(session.state().page_index().get(), 1);
        assert_eq!(session.renderer().remaining, Some(1));

        session.apply_filter(&FilterCriteria::default().with_author(AuthorId::new("nobody")))?;
        assert!(session.renderer().list.is_empty());
        assert!(session.renderer().empty);
        assert_eq!(session.renderer().remaining, Some(0));
        assert!(session.show_more()?.is_none());
        Ok(())
    }

    #[test]
    fn select_opens_detail_or_ignores() -> error_stack::Result<(), KernelError> {
        let shelf = Shelf::new();
        let mut session = BrowseSession::new(&shelf, two(), Recorder::default());
        let handles = session.start()?;

        assert!(session.select(&handles[1])?);
        let detail = session.renderer().detail.clone().expect("detail shown");
        assert_eq!(detail.title, "Book B");
        assert_eq!(detail.subtitle, "Jane Austen (2010)");

        assert!(!session.select(&"preview-404".to_string())?);
        assert!(!session.select(&"garbage".to_string())?);
        assert_eq!(
            session.renderer().detail.as_ref().map(|d| d.id.as_str()),
            Some("2")
        );
        Ok(())
    }
}
