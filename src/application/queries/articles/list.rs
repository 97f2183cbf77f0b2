use super::ArticleQueryService;
use crate::{application::error::ApplicationResult, domain::article::Article};

impl ArticleQueryService {
    pub async fn list(&self) -> ApplicationResult<Vec<Article>> {
        Ok(self.repo.find_all().await?)
    }
}
