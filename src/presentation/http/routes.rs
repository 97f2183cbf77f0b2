// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{article_api, articles, comments},
    middleware::flash::expire_flash,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the application router. An empty `allowed_origins` allows any origin.
pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/articles/WriteForm", get(articles::write_form))
        .route("/articles/Write", post(articles::write))
        .route("/articles/List", get(articles::list))
        .route("/articles/Edit", post(articles::edit))
        .route("/articles/{id}", get(articles::view))
        .route("/articles/{id}/EditForm", get(articles::edit_form))
        .route("/articles/{id}/Delete", get(articles::delete))
        .route(
            "/api/articles",
            get(article_api::index).post(article_api::create),
        )
        .route(
            "/api/articles/{id}",
            get(article_api::show)
                .patch(article_api::update)
                .delete(article_api::delete),
        )
        .route(
            "/api/articles/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/api/transaction-test", post(article_api::transaction_test))
        .route(
            "/api/transaction-test/unguarded",
            post(article_api::transaction_test_unguarded),
        )
        .layer(middleware::from_fn(expire_flash))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
