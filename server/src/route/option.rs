use crate::controller::Exhaust;
use crate::handler::AppModule;
use crate::response::OptionPresenter;
use application::service::GetOptionService;
use axum::extract::State;
use axum::routing::get;
use axum::Router;

pub trait OptionRouter {
    fn route_option(self) -> Self;
}

impl OptionRouter for Router<AppModule> {
    fn route_option(self) -> Self {
        self.route(
            "/authors",
            get(|State(module): State<AppModule>| async move {
                OptionPresenter.emit(module.authors())
            }),
        )
        .route(
            "/genres",
            get(|State(module): State<AppModule>| async move {
                OptionPresenter.emit(module.genres())
            }),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::handler::AppModule;
    use crate::route::OptionRouter;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use driver::dataset::JsonCatalogSource;
    use kernel::prelude::entity::PageSize;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    #[tokio::test]
    async fn lists_authors_and_genres() {
        let catalog = JsonCatalogSource::parse(
            br#"{ "books": [], "authors": { "b": "Bo", "a": "Al" }, "genres": { "g": "Gothic" } }"#,
        )
        .unwrap();
        let router = Router::new()
            .route_option()
            .with_state(AppModule::from_catalog(catalog, PageSize::default()));

        for (uri, expect) in [
            (
                "/authors",
                json!([{ "id": "b", "name": "Bo" }, { "id": "a", "name": "Al" }]),
            ),
            ("/genres", json!([{ "id": "g", "name": "Gothic" }])),
        ] {
            let response = router
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(body, expect);
        }
    }
}
