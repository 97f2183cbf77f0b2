use std::sync::Arc;

use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::{article::ArticleId, comment::CommentRepository},
};

pub struct CommentQueryService {
    repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self { repo }
    }

    pub async fn comments_for_article(&self, article_id: i64) -> ApplicationResult<Vec<CommentDto>> {
        let comments = self.repo.find_by_article_id(ArticleId(article_id)).await?;
        Ok(comments.into_iter().map(CommentDto::from).collect())
    }
}
