mod book;
mod browse;
mod option;

pub use self::{book::*, browse::*, option::*};
