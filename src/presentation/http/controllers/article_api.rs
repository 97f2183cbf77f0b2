// src/presentation/http/controllers/article_api.rs
use crate::application::dto::{ArticleForm, ArticleResponse};
use crate::domain::article::Article;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};

// 200 with the article, or a bare 400 when the service declined the request.
fn ok_or_bad_request(article: Option<Article>) -> Response {
    match article {
        Some(article) => Json(ArticleResponse::from(article)).into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/articles",
    responses(
        (status = 200, description = "Every stored article.", body = Vec<ArticleResponse>)
    ),
    tag = "Articles"
)]
pub async fn index(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleResponse>>> {
    let articles = state.services.article_queries.list().await.into_http()?;
    Ok(Json(articles.into_iter().map(ArticleResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article, or null when absent.", body = ArticleResponse)
    ),
    tag = "Articles"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Option<ArticleResponse>>> {
    let article = state.services.article_queries.show(id).await.into_http()?;
    Ok(Json(article.map(ArticleResponse::from)))
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = ArticleForm,
    responses(
        (status = 200, description = "Created article.", body = ArticleResponse),
        (status = 400, description = "The form carried an id.")
    ),
    tag = "Articles"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    Json(form): Json<ArticleForm>,
) -> HttpResult<Response> {
    let created = state
        .services
        .article_commands
        .create(form)
        .await
        .into_http()?;
    Ok(ok_or_bad_request(created))
}

#[utoipa::path(
    patch,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ArticleForm,
    responses(
        (status = 200, description = "Patched article.", body = ArticleResponse),
        (status = 400, description = "Unknown article or mismatched id.")
    ),
    tag = "Articles"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(form): Json<ArticleForm>,
) -> HttpResult<Response> {
    let updated = state
        .services
        .article_commands
        .update(id, form)
        .await
        .into_http()?;
    Ok(ok_or_bad_request(updated))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article as it was before deletion.", body = ArticleResponse),
        (status = 400, description = "Unknown article.")
    ),
    tag = "Articles"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let deleted = state
        .services
        .article_commands
        .delete(id)
        .await
        .into_http()?;
    Ok(ok_or_bad_request(deleted))
}

#[utoipa::path(
    post,
    path = "/api/transaction-test",
    request_body = Vec<ArticleForm>,
    responses(
        (status = 200, description = "Saved articles.", body = Vec<ArticleResponse>),
        (status = 500, description = "Payment probe failed; nothing was saved.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Transactions"
)]
pub async fn transaction_test(
    Extension(state): Extension<HttpState>,
    Json(forms): Json<Vec<ArticleForm>>,
) -> HttpResult<Json<Vec<ArticleResponse>>> {
    let created = state
        .services
        .article_commands
        .create_articles_transactional(forms)
        .await
        .into_http()?;
    Ok(Json(created.into_iter().map(ArticleResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/transaction-test/unguarded",
    request_body = Vec<ArticleForm>,
    responses(
        (status = 200, description = "Saved articles.", body = Vec<ArticleResponse>),
        (status = 500, description = "Payment probe failed; earlier saves remain.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Transactions"
)]
pub async fn transaction_test_unguarded(
    Extension(state): Extension<HttpState>,
    Json(forms): Json<Vec<ArticleForm>>,
) -> HttpResult<Json<Vec<ArticleResponse>>> {
    let created = state
        .services
        .article_commands
        .create_articles(forms)
        .await
        .into_http()?;
    Ok(Json(created.into_iter().map(ArticleResponse::from).collect()))
}
