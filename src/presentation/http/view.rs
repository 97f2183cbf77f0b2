//! Page responses: a named view with its model, or a redirect.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;

use super::extractors::Flash;

pub const ARTICLE_LIST_PATH: &str = "/articles/List";

/// Serialized in place of a rendered template:
/// `{"view": "articles/list", "model": {...}, "msg": null}`.
#[derive(Debug, Serialize)]
pub struct View<M> {
    view: &'static str,
    model: M,
    msg: Option<String>,
}

impl<M: Serialize> View<M> {
    pub fn new(view: &'static str, model: M) -> Self {
        Self {
            view,
            model,
            msg: None,
        }
    }

    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.msg = flash.0;
        self
    }
}

impl<M: Serialize> IntoResponse for View<M> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub fn redirect_to_list() -> Redirect {
    Redirect::to(ARTICLE_LIST_PATH)
}
