use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// All articles ordered by ascending id.
    async fn find_all(&self) -> DomainResult<Vec<Article>>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Insert when `article.id` is unset, otherwise update that row in place.
    /// A set key with no matching row is inserted under a fresh key.
    async fn save(&self, article: Article) -> DomainResult<Article>;
    async fn delete(&self, article: &Article) -> DomainResult<()>;
}

/// Opens transactions over the article store.
#[async_trait]
pub trait ArticleUnitOfWork: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn ArticleTransaction>>;
}

/// Writes made through a transaction become visible only on `commit`.
/// Dropping the handle without committing discards them.
#[async_trait]
pub trait ArticleTransaction: Send {
    async fn find_by_id(&mut self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn save(&mut self, article: Article) -> DomainResult<Article>;
    async fn commit(self: Box<Self>) -> DomainResult<()>;
    async fn rollback(self: Box<Self>) -> DomainResult<()>;
}
