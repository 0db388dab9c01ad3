use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{BookTransformer, GetBookRequest, SearchBookRequest};
use crate::response::{BookDetailResponse, BookPresenter};
use application::service::{GetBookService, SearchBookService};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(
                |State(module): State<AppModule>, Query(req): Query<SearchBookRequest>| async move {
                    Controller::new(BookTransformer::new(*module.page_size()), BookPresenter)
                        .try_intake(req)
                        .and_then(|transformed| transformed.handle(|dto| module.search_books(dto)))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer::new(*module.page_size()), BookPresenter)
                        .intake(GetBookRequest::new(id))
                        .handle(|dto| module.get_book(dto))
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(BookDetailResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            ),
        )
    }
}
