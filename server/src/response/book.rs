use crate::controller::Exhaust;
use application::transfer::{BookDetailDto, BookDto, BookPageDto};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BookSummaryResponse {
    id: String,
    title: String,
    author: String,
    image: String,
}

impl From<BookDto> for BookSummaryResponse {
    fn from(value: BookDto) -> Self {
        let BookDto {
            id,
            title,
            author,
            image,
        } = value;
        Self {
            id,
            title,
            author,
            image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookPageResponse {
    books: Vec<BookSummaryResponse>,
    page: usize,
    page_size: usize,
    total: usize,
    remaining: usize,
}

impl IntoResponse for BookPageResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookDetailResponse {
    id: String,
    title: String,
    subtitle: String,
    description: String,
    image: String,
    published_year: i32,
}

impl IntoResponse for BookDetailResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<BookPageDto> for BookPresenter {
    type To = BookPageResponse;
    fn emit(&self, input: BookPageDto) -> Self::To {
        BookPageResponse {
            books: input.books.into_iter().map(Into::into).collect(),
            page: input.page,
            page_size: input.page_size,
            total: input.total,
            remaining: input.remaining,
        }
    }
}

impl Exhaust<Option<BookDetailDto>> for BookPresenter {
    type To = Option<BookDetailResponse>;
    fn emit(&self, input: Option<BookDetailDto>) -> Self::To {
        input.map(|detail| BookDetailResponse {
            id: detail.id,
            title: detail.title,
            subtitle: detail.subtitle,
            description: detail.description,
            image: detail.image,
            published_year: detail.published_year,
        })
    }
}
