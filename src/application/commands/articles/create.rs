// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleForm, error::ApplicationResult},
    domain::article::Article,
};

impl ArticleCommandService {
    /// Persist a new article. Returns `None` when the form already names a key,
    /// so creation can never overwrite a stored row.
    pub async fn create(&self, form: ArticleForm) -> ApplicationResult<Option<Article>> {
        let article = form.to_entity();
        if article.is_persisted() {
            tracing::info!(id = ?article.id, "rejected create carrying an id");
            return Ok(None);
        }

        let saved = self.repo.save(article).await?;
        Ok(Some(saved))
    }
}
