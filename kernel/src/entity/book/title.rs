use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Case-insensitive substring test. `needle` must already be lowercased.
    pub fn contains_folded(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(needle)
    }
}
