// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleRepository, ArticleTransaction, ArticleUnitOfWork,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, Transaction};

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleUnitOfWork {
    pool: PgPool,
}

impl PostgresArticleUnitOfWork {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub struct PostgresArticleTransaction {
    tx: Transaction<'static, Postgres>,
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: Option<String>,
    content: Option<String>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article::new(Some(ArticleId(row.id)), row.title, row.content)
    }
}

async fn select_by_id(conn: &mut PgConnection, id: ArticleId) -> DomainResult<Option<Article>> {
    let row = sqlx::query_as::<_, ArticleRow>(
        "SELECT id, title, content FROM articles WHERE id = $1",
    )
    .bind(i64::from(id))
    .fetch_optional(conn)
    .await
    .map_err(map_sqlx)?;

    Ok(row.map(Article::from))
}

async fn upsert(conn: &mut PgConnection, article: Article) -> DomainResult<Article> {
    let Article { id, title, content } = article;

    if let Some(id) = id {
        let updated = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET title = $1, content = $2 WHERE id = $3
             RETURNING id, title, content",
        )
        .bind(title.as_deref())
        .bind(content.as_deref())
        .bind(i64::from(id))
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        if let Some(row) = updated {
            return Ok(row.into());
        }
    }

    let row = sqlx::query_as::<_, ArticleRow>(
        "INSERT INTO articles (title, content) VALUES ($1, $2)
         RETURNING id, title, content",
    )
    .bind(title.as_deref())
    .bind(content.as_deref())
    .fetch_one(conn)
    .await
    .map_err(map_sqlx)?;

    Ok(row.into())
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, content FROM articles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        select_by_id(&mut conn, id).await
    }

    async fn save(&self, article: Article) -> DomainResult<Article> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        upsert(&mut conn, article).await
    }

    async fn delete(&self, article: &Article) -> DomainResult<()> {
        let id = article
            .id
            .ok_or_else(|| DomainError::NotFound("article has no id".into()))?;

        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleUnitOfWork for PostgresArticleUnitOfWork {
    async fn begin(&self) -> DomainResult<Box<dyn ArticleTransaction>> {
        let tx = self.pool.begin().await.map_err(map_sqlx)?;
        Ok(Box::new(PostgresArticleTransaction { tx }))
    }
}

// Dropping `tx` without commit issues ROLLBACK on the connection.
#[async_trait]
impl ArticleTransaction for PostgresArticleTransaction {
    async fn find_by_id(&mut self, id: ArticleId) -> DomainResult<Option<Article>> {
        select_by_id(&mut self.tx, id).await
    }

    async fn save(&mut self, article: Article) -> DomainResult<Article> {
        upsert(&mut self.tx, article).await
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.tx.commit().await.map_err(map_sqlx)
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        self.tx.rollback().await.map_err(map_sqlx)
    }
}
