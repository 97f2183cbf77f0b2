use crate::application::dto::CommentDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Comments of the article, oldest first.", body = Vec<CommentDto>)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<i64>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .comments_for_article(article_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    request_body = CommentDto,
    responses(
        (status = 200, description = "Created comment.", body = CommentDto),
        (status = 400, description = "The comment carried an id or another article's id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<i64>,
    Json(dto): Json<CommentDto>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .create_comment(article_id, dto)
        .await
        .into_http()
        .map(Json)
}
