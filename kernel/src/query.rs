mod author;
mod book;
mod genre;

pub use self::{author::*, book::*, genre::*};
