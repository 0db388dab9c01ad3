use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookImage(String);

impl BookImage {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }
}
