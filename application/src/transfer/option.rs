use kernel::prelude::entity::{Author, Genre};

/// One selectable entry of an author or genre dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDto {
    pub id: String,
    pub name: String,
}

impl From<&Author> for OptionDto {
    fn from(value: &Author) -> Self {
        Self {
            id: value.id().as_ref().clone(),
            name: value.name().as_ref().clone(),
        }
    }
}

impl From<&Genre> for OptionDto {
    fn from(value: &Genre) -> Self {
        Self {
            id: value.id().as_ref().clone(),
            name: value.name().as_ref().clone(),
        }
    }
}
