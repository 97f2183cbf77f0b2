use super::ArticleQueryService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, ArticleId},
};

impl ArticleQueryService {
    /// The article at `id`, or `None`; callers render an empty view for `None`.
    pub async fn show(&self, id: i64) -> ApplicationResult<Option<Article>> {
        Ok(self.repo.find_by_id(ArticleId(id)).await?)
    }
}
