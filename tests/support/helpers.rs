// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, header};
use axum::response::Response;
use green_board::application::services::ApplicationServices;
use green_board::domain::article::{ArticleRepository, ArticleUnitOfWork};
use green_board::domain::comment::CommentRepository;
use green_board::infrastructure::repositories::InMemoryStore;
use green_board::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

pub fn build_services(store: &InMemoryStore) -> ApplicationServices {
    let article_repo: Arc<dyn ArticleRepository> = Arc::new(store.clone());
    let unit_of_work: Arc<dyn ArticleUnitOfWork> = Arc::new(store.clone());
    let comment_repo: Arc<dyn CommentRepository> = Arc::new(store.clone());
    ApplicationServices::new(article_repo, unit_of_work, comment_repo)
}

pub fn router_for(services: ApplicationServices) -> axum::Router {
    let state = HttpState {
        services: Arc::new(services),
    };
    build_router(state, &[])
}

/// Router over a fresh in-memory store, plus the store for direct inspection.
pub fn make_test_router() -> (axum::Router, InMemoryStore) {
    let store = InMemoryStore::new();
    let router = router_for(build_services(&store));
    (router, store)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let encoded = serde_urlencoded::to_string(fields).expect("encode form");
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encoded))
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// `name=value` pairs from every `Set-Cookie` header of the response.
pub fn set_cookies(resp: &Response) -> Vec<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .map(|pair| pair.trim().to_string())
        .collect()
}
