mod json;
mod memory;

pub use self::{json::*, memory::*};
