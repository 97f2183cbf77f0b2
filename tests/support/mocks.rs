// tests/support/mocks.rs
use async_trait::async_trait;
use green_board::domain::article::{
    Article, ArticleId, ArticleRepository, ArticleTransaction, ArticleUnitOfWork,
};
use green_board::domain::errors::{DomainError, DomainResult};

/// Article store whose every call fails, standing in for an unreachable database.
pub struct UnavailableArticleStore;

fn unavailable() -> DomainError {
    DomainError::Persistence("connection refused".into())
}

#[async_trait]
impl ArticleRepository for UnavailableArticleStore {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(unavailable())
    }

    async fn save(&self, _article: Article) -> DomainResult<Article> {
        Err(unavailable())
    }

    async fn delete(&self, _article: &Article) -> DomainResult<()> {
        Err(unavailable())
    }
}

#[async_trait]
impl ArticleUnitOfWork for UnavailableArticleStore {
    async fn begin(&self) -> DomainResult<Box<dyn ArticleTransaction>> {
        Err(unavailable())
    }
}
