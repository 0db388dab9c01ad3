mod criteria;
mod filter;
mod page;
mod state;

pub use self::{criteria::*, filter::*, page::*, state::*};
