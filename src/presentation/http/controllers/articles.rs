// src/presentation/http/controllers/articles.rs
//! Form-driven article pages. Each handler answers with a view model or a
//! redirect back to the list.
use crate::application::dto::{ArticleDto, ArticleForm, ArticleResponse};
use crate::domain::article::ArticleId;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Flash;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::view::{View, redirect_to_list};
use axum::{
    Extension, Form,
    extract::Path,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ArticleModel {
    pub article: Option<ArticleResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListModel {
    pub article_list: Vec<ArticleResponse>,
}

pub async fn write_form(flash: Flash) -> View<()> {
    View::new("articles/write", ()).with_flash(flash)
}

pub async fn write(
    Extension(state): Extension<HttpState>,
    Form(article_dto): Form<ArticleDto>,
) -> HttpResult<Response> {
    tracing::debug!(?article_dto, "write form submitted");

    let article = article_dto.to_entity();
    let saved = state
        .services
        .article_repo()
        .save(article)
        .await
        .into_http()?;
    tracing::info!(id = ?saved.id, "article saved");

    Ok(redirect_to_list().into_response())
}

pub async fn view(
    Extension(state): Extension<HttpState>,
    flash: Flash,
    Path(id): Path<i64>,
) -> HttpResult<View<ArticleModel>> {
    let article = state
        .services
        .article_repo()
        .find_by_id(ArticleId(id))
        .await
        .into_http()?;
    tracing::debug!(id, found = article.is_some(), "article lookup");

    let model = ArticleModel {
        article: article.map(ArticleResponse::from),
    };
    Ok(View::new("articles/view", model).with_flash(flash))
}

pub async fn list(
    Extension(state): Extension<HttpState>,
    flash: Flash,
) -> HttpResult<View<ArticleListModel>> {
    let articles = state
        .services
        .article_repo()
        .find_all()
        .await
        .into_http()?;

    let model = ArticleListModel {
        article_list: articles.into_iter().map(ArticleResponse::from).collect(),
    };
    Ok(View::new("articles/list", model).with_flash(flash))
}

pub async fn edit_form(
    Extension(state): Extension<HttpState>,
    flash: Flash,
    Path(id): Path<i64>,
) -> HttpResult<View<ArticleModel>> {
    let article = state
        .services
        .article_repo()
        .find_by_id(ArticleId(id))
        .await
        .into_http()?;

    let model = ArticleModel {
        article: article.map(ArticleResponse::from),
    };
    Ok(View::new("articles/edit", model).with_flash(flash))
}

/// Replace the stored article with the submitted fields. Unknown or missing
/// ids are ignored and the client is still sent to the list.
pub async fn edit(
    Extension(state): Extension<HttpState>,
    Form(article_form): Form<ArticleForm>,
) -> HttpResult<Response> {
    tracing::info!(?article_form, "edit form submitted");

    let article = article_form.to_entity();
    let Some(id) = article.id else {
        return Ok(redirect_to_list().into_response());
    };

    let repo = state.services.article_repo();
    let target = repo
        .find_by_id(id)
        .await
        .into_http()?;

    if target.is_some() {
        repo.save(article).await.into_http()?;
    }

    Ok(redirect_to_list().into_response())
}

pub async fn delete(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let repo = state.services.article_repo();
    let target = repo
        .find_by_id(ArticleId(id))
        .await
        .into_http()?;

    let Some(target) = target else {
        return Ok(redirect_to_list().into_response());
    };

    repo.delete(&target).await.into_http()?;

    let message = format!("{id}번 자료가 삭제되었습니다");
    match Flash::set_cookie(&message) {
        Ok(cookie) => Ok(([(SET_COOKIE, cookie)], redirect_to_list()).into_response()),
        Err(err) => {
            tracing::warn!(error = %err, "could not encode flash message");
            Ok(redirect_to_list().into_response())
        }
    }
}
