mod book;
mod option;

pub use self::{book::*, option::*};
