// src/application/commands/articles/bulk.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleForm,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleId},
};

/// Key that no stored article ever has; keys start at 1.
pub const PAYMENT_PROBE_ID: ArticleId = ArticleId(-1);

const PAYMENT_FAILED: &str = "결재 실패!!!";

impl ArticleCommandService {
    /// Save every form one by one, then fail on the payment probe.
    ///
    /// Each save commits on its own, so the rows written before the failure
    /// stay in the store.
    pub async fn create_articles(&self, forms: Vec<ArticleForm>) -> ApplicationResult<Vec<Article>> {
        let articles: Vec<Article> = forms.iter().map(ArticleForm::to_entity).collect();

        let mut saved = Vec::with_capacity(articles.len());
        for article in articles {
            saved.push(self.repo.save(article).await?);
        }

        self.repo
            .find_by_id(PAYMENT_PROBE_ID)
            .await?
            .ok_or_else(|| ApplicationError::forced_failure(PAYMENT_FAILED))?;

        Ok(saved)
    }

    /// Same as [`create_articles`](Self::create_articles) inside one
    /// transaction: the probe failure rolls back every save of the call.
    pub async fn create_articles_transactional(
        &self,
        forms: Vec<ArticleForm>,
    ) -> ApplicationResult<Vec<Article>> {
        let articles: Vec<Article> = forms.iter().map(ArticleForm::to_entity).collect();

        let mut tx = self.unit_of_work.begin().await?;

        let mut saved = Vec::with_capacity(articles.len());
        for article in articles {
            saved.push(tx.save(article).await?);
        }

        if tx.find_by_id(PAYMENT_PROBE_ID).await?.is_none() {
            tx.rollback().await?;
            tracing::warn!(rolled_back = saved.len(), "bulk article insert rolled back");
            return Err(ApplicationError::forced_failure(PAYMENT_FAILED));
        }

        tx.commit().await?;
        Ok(saved)
    }
}
