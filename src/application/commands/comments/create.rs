use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        article_id: i64,
        dto: CommentDto,
    ) -> ApplicationResult<CommentDto> {
        let article = self
            .article_repo
            .find_by_id(ArticleId(article_id))
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {article_id} not found")))?;

        let comment = dto.into_comment(article)?;
        let created = self.comment_repo.save(comment).await?;
        Ok(created.into())
    }
}
