use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleForm, error::ApplicationResult},
    domain::article::{Article, ArticleId},
};

impl ArticleCommandService {
    /// Patch the article at `id` with the present fields of `form`.
    ///
    /// Returns `None` without writing when no article has `id` or when the
    /// form's own id differs from `id`.
    pub async fn update(&self, id: i64, form: ArticleForm) -> ApplicationResult<Option<Article>> {
        let candidate = form.to_entity();
        tracing::info!(id, article = ?candidate, "article update requested");

        let target = self.repo.find_by_id(ArticleId(id)).await?;
        let mut target = match target {
            Some(target) if candidate.id == Some(ArticleId(id)) => target,
            _ => {
                tracing::info!(id, article = ?candidate, "rejected article update");
                return Ok(None);
            }
        };

        target.patch(candidate);
        let updated = self.repo.save(target).await?;
        Ok(Some(updated))
    }
}
