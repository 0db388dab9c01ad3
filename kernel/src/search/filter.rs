use crate::entity::Book;
use crate::search::FilterCriteria;

/// Returns the books satisfying every constraint in `criteria`, in their original order.
///
/// The result borrows from the input, so filtering an earlier result again is as cheap
/// as filtering the full collection.
pub fn filter<'a, I>(books: I, criteria: &FilterCriteria) -> Vec<&'a Book>
where
    I: IntoIterator<Item = &'a Book>,
{
    let matcher = criteria.matcher();
    books.into_iter().filter(|book| matcher.matches(book)).collect()
}
