use super::map_sqlx;
use crate::domain::article::{Article, ArticleId};
use crate::domain::comment::{Comment, CommentId, CommentRepository};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    nickname: Option<String>,
    body: Option<String>,
    article_id: i64,
    article_title: Option<String>,
    article_content: Option<String>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: Some(CommentId(row.id)),
            article: Article::new(
                Some(ArticleId(row.article_id)),
                row.article_title,
                row.article_content,
            ),
            nickname: row.nickname,
            body: row.body,
        }
    }
}

#[derive(Debug, FromRow)]
struct SavedRow {
    id: i64,
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_article_id(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT c.id, c.nickname, c.body,
                    a.id AS article_id, a.title AS article_title, a.content AS article_content
             FROM comments c
             JOIN articles a ON a.id = c.article_id
             WHERE c.article_id = $1
             ORDER BY c.id",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn save(&self, comment: Comment) -> DomainResult<Comment> {
        let article_id = comment
            .article_id()
            .ok_or_else(|| DomainError::Validation("comment article has no id".into()))?;

        let saved = match comment.id {
            Some(id) => sqlx::query_as::<_, SavedRow>(
                "UPDATE comments SET nickname = $1, body = $2 WHERE id = $3 RETURNING id",
            )
            .bind(comment.nickname.as_deref())
            .bind(comment.body.as_deref())
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?,
            None => sqlx::query_as::<_, SavedRow>(
                "INSERT INTO comments (article_id, nickname, body) VALUES ($1, $2, $3) RETURNING id",
            )
            .bind(i64::from(article_id))
            .bind(comment.nickname.as_deref())
            .bind(comment.body.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?,
        };

        Ok(Comment {
            id: Some(CommentId(saved.id)),
            ..comment
        })
    }
}
