use std::num::NonZeroUsize;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

pub const DEFAULT_PAGE_SIZE: usize = 36;

const DEFAULT_SIZE: NonZeroUsize = match NonZeroUsize::new(DEFAULT_PAGE_SIZE) {
    Some(size) => size,
    None => panic!("default page size must be positive"),
};

/// 1-based position in a paged match set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PageIndex(NonZeroUsize);

impl PageIndex {
    pub fn new(index: NonZeroUsize) -> Self {
        Self(index)
    }

    pub fn first() -> Self {
        Self(NonZeroUsize::MIN)
    }

    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for PageIndex {
    fn default() -> Self {
        Self::first()
    }
}

impl TryFrom<usize> for PageIndex {
    type Error = Report<KernelError>;
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(value).map(Self).ok_or_else(|| {
            Report::new(KernelError::InvalidInput).attach_printable("page index starts at 1")
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(size: NonZeroUsize) -> Self {
        Self(size)
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_SIZE)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Report<KernelError>;
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(value).map(Self).ok_or_else(|| {
            Report::new(KernelError::InvalidInput).attach_printable("page size must be positive")
        })
    }
}

#[cfg(test)]
mod test {
    use super::{PageIndex, PageSize, DEFAULT_PAGE_SIZE};

    #[test]
    fn page_index_starts_at_one() {
        assert_eq!(PageIndex::first().get(), 1);
        assert_eq!(PageIndex::default(), PageIndex::first());
        assert_eq!(PageIndex::first().next().get(), 2);
        assert!(PageIndex::try_from(0).is_err());
        assert_eq!(PageIndex::try_from(3).map(|index| index.get()).ok(), Some(3));
    }

    #[test]
    fn page_size_rejects_zero() {
        assert!(PageSize::try_from(0).is_err());
        assert_eq!(PageSize::default().get(), DEFAULT_PAGE_SIZE);
    }
}
