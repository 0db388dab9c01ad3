use crate::entity::{Genre, GenreId};

pub trait GenreQuery: Sync + Send + 'static {
    fn find_by_id(&self, id: &GenreId) -> Option<&Genre>;
    fn find_all(&self) -> &[Genre];
}

pub trait DependOnGenreQuery: Sync + Send + 'static {
    type GenreQuery: GenreQuery;
    fn genre_query(&self) -> &Self::GenreQuery;
}
