// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, ArticleId},
};

impl ArticleCommandService {
    /// Remove the article at `id` and return its last stored state.
    pub async fn delete(&self, id: i64) -> ApplicationResult<Option<Article>> {
        let Some(target) = self.repo.find_by_id(ArticleId(id)).await? else {
            return Ok(None);
        };

        self.repo.delete(&target).await?;
        Ok(Some(target))
    }
}
