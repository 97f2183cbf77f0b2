//! Process-local store with the same contract as the PostgreSQL repositories.
//!
//! Selected with `DATABASE_URL=memory`; the integration tests run on it too.
use crate::domain::article::{
    Article, ArticleId, ArticleRepository, ArticleTransaction, ArticleUnitOfWork,
};
use crate::domain::comment::{Comment, CommentId, CommentRepository};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Clone)]
struct CommentRecord {
    article_id: i64,
    nickname: Option<String>,
    body: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct Tables {
    articles: BTreeMap<i64, Article>,
    comments: BTreeMap<i64, CommentRecord>,
    last_article_id: i64,
    last_comment_id: i64,
}

impl Tables {
    fn find_article(&self, id: ArticleId) -> Option<Article> {
        self.articles.get(&id.0).cloned()
    }

    fn save_article(&mut self, mut article: Article) -> Article {
        let key = match article.id {
            Some(id) if self.articles.contains_key(&id.0) => id.0,
            _ => {
                self.last_article_id += 1;
                self.last_article_id
            }
        };
        article.id = Some(ArticleId(key));
        self.articles.insert(key, article.clone());
        article
    }

    fn delete_article(&mut self, id: ArticleId) -> DomainResult<()> {
        if self.articles.remove(&id.0).is_none() {
            return Err(DomainError::NotFound("article not found".into()));
        }
        self.comments.retain(|_, record| record.article_id != id.0);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryStore {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let tables = self.tables.lock().await;
        Ok(tables.articles.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.tables.lock().await.find_article(id))
    }

    async fn save(&self, article: Article) -> DomainResult<Article> {
        Ok(self.tables.lock().await.save_article(article))
    }

    async fn delete(&self, article: &Article) -> DomainResult<()> {
        let id = article
            .id
            .ok_or_else(|| DomainError::NotFound("article has no id".into()))?;
        self.tables.lock().await.delete_article(id)
    }
}

/// Holds the store lock for its whole lifetime, so transactions are serial.
pub struct InMemoryTransaction {
    guard: OwnedMutexGuard<Tables>,
    // Some until committed
    snapshot: Option<Tables>,
}

impl Drop for InMemoryTransaction {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            *self.guard = snapshot;
        }
    }
}

#[async_trait]
impl ArticleUnitOfWork for InMemoryStore {
    async fn begin(&self) -> DomainResult<Box<dyn ArticleTransaction>> {
        let guard = Arc::clone(&self.tables).lock_owned().await;
        let snapshot = Some(guard.clone());
        Ok(Box::new(InMemoryTransaction { guard, snapshot }))
    }
}

#[async_trait]
impl ArticleTransaction for InMemoryTransaction {
    async fn find_by_id(&mut self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.guard.find_article(id))
    }

    async fn save(&mut self, article: Article) -> DomainResult<Article> {
        Ok(self.guard.save_article(article))
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let mut tx = self;
        tx.snapshot = None;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_by_article_id(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let tables = self.tables.lock().await;
        let Some(article) = tables.find_article(article_id) else {
            return Ok(Vec::new());
        };

        Ok(tables
            .comments
            .iter()
            .filter(|(_, record)| record.article_id == article_id.0)
            .map(|(id, record)| Comment {
                id: Some(CommentId(*id)),
                article: article.clone(),
                nickname: record.nickname.clone(),
                body: record.body.clone(),
            })
            .collect())
    }

    async fn save(&self, comment: Comment) -> DomainResult<Comment> {
        let article_id = comment
            .article_id()
            .ok_or_else(|| DomainError::Validation("comment article has no id".into()))?;

        let mut tables = self.tables.lock().await;
        if !tables.articles.contains_key(&article_id.0) {
            return Err(DomainError::NotFound("article not found".into()));
        }

        let key = match comment.id {
            Some(id) if tables.comments.contains_key(&id.0) => id.0,
            Some(_) => return Err(DomainError::NotFound("comment not found".into())),
            None => {
                tables.last_comment_id += 1;
                tables.last_comment_id
            }
        };
        tables.comments.insert(
            key,
            CommentRecord {
                article_id: article_id.0,
                nickname: comment.nickname.clone(),
                body: comment.body.clone(),
            },
        );

        Ok(Comment {
            id: Some(CommentId(key)),
            ..comment
        })
    }
}
