use crate::domain::article::ArticleId;
use crate::domain::comment::entity::Comment;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments of one article ordered by ascending id. Unknown articles yield an empty list.
    async fn find_by_article_id(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;
    async fn save(&self, comment: Comment) -> DomainResult<Comment>;
}
