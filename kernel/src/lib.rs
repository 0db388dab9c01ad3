pub use crate::error::*;

mod entity;
mod error;
mod query;
mod search;
mod source;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod source {
        pub use crate::source::*;
    }
    pub mod query {
        pub use crate::query::*;
    }
    pub mod search {
        pub use crate::search::*;
    }
}
