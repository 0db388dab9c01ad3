mod author;
mod book;
mod catalog;
mod common;
mod genre;

pub use self::{author::*, book::*, catalog::*, common::*, genre::*};
