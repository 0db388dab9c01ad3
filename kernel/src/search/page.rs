use crate::entity::{PageIndex, PageSize};

/// One bounded slice of a match set plus how many matches lie beyond it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'m, T> {
    items: &'m [T],
    index: PageIndex,
    remaining: usize,
}

impl<'m, T> Page<'m, T> {
    pub fn items(&self) -> &'m [T] {
        self.items
    }

    pub fn index(&self) -> PageIndex {
        self.index
    }

    /// Matches after this page that have not been revealed yet.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn has_more(&self) -> bool {
        self.remaining > 0
    }
}

/// Slices `matches[(index - 1) * size .. index * size]`, clamped to the end of `matches`.
pub fn page<T>(matches: &[T], index: PageIndex, size: PageSize) -> Page<'_, T> {
    Page {
        items: &matches[page_range(matches.len(), index, size)],
        index,
        remaining: remaining(matches.len(), index, size),
    }
}

/// `max(0, total - index * size)` without overflowing.
pub fn remaining(total: usize, index: PageIndex, size: PageSize) -> usize {
    total.saturating_sub(index.get().saturating_mul(size.get()))
}

fn page_range(total: usize, index: PageIndex, size: PageSize) -> std::ops::Range<usize> {
    let start = (index.get() - 1).saturating_mul(size.get());
    let end = start.saturating_add(size.get());
    start.min(total)..end.min(total)
}

#[cfg(test)]
mod test {
    use super::{page, remaining};
    use crate::entity::{PageIndex, PageSize};
    use crate::search::fixture::{shelf, titles};
    use crate::search::{filter, FilterCriteria};

    fn index(value: usize) -> PageIndex {
        PageIndex::try_from(value).unwrap()
    }

    fn size(value: usize) -> PageSize {
        PageSize::try_from(value).unwrap()
    }

    #[test]
    fn filtered_then_paged() {
        let books = shelf();
        let found = filter(&books, &FilterCriteria::default().with_title("a"));

        let first = page(&found, index(1), size(2));
        assert_eq!(titles(first.items()), vec!["A Tale", "Another A"]);
        assert_eq!(first.remaining(), 1);
        assert!(first.has_more());

        let second = page(&found, index(2), size(2));
        assert_eq!(titles(second.items()), vec!["A Second"]);
        assert_eq!(second.remaining(), 0);
        assert!(!second.has_more());
    }

    #[test]
    fn out_of_range_is_empty() {
        let items = [1, 2, 3];
        let out = page(&items, index(5), size(2));
        assert!(out.items().is_empty());
        assert_eq!(out.remaining(), 0);

        let far = page(&items, index(usize::MAX), size(usize::MAX));
        assert!(far.items().is_empty());
        assert_eq!(far.remaining(), 0);
    }

    #[test]
    fn pages_reconstruct_prefix() {
        let items = (0..23).collect::<Vec<u32>>();
        for per in 1..=8 {
            for k in 1..=6 {
                let joined = (1..=k)
                    .flat_map(|i| page(&items, index(i), size(per)).items().iter().copied())
                    .collect::<Vec<_>>();
                let expect = items.len().min(k * per);
                assert_eq!(joined, items[..expect].to_vec(), "per={per} k={k}");
            }
        }
    }

    #[test]
    fn remaining_never_negative() {
        assert_eq!(remaining(0, index(1), size(36)), 0);
        assert_eq!(remaining(40, index(1), size(36)), 4);
        assert_eq!(remaining(40, index(2), size(36)), 0);
        assert_eq!(remaining(72, index(2), size(36)), 0);
        assert_eq!(remaining(73, index(2), size(36)), 1);
    }
}
