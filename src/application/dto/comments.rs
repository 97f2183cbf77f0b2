use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::Article;
use crate::domain::comment::Comment;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::form_fields;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    #[serde(default, deserialize_with = "form_fields::optional_key")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "form_fields::optional_key")]
    pub article_id: Option<i64>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl From<&Comment> for CommentDto {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.map(Into::into),
            article_id: comment.article_id().map(Into::into),
            nickname: comment.nickname.clone(),
            body: comment.body.clone(),
        }
    }
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

impl CommentDto {
    /// Turn the request into an unsaved comment owned by `article`.
    ///
    /// The request must not carry a key, and a given `articleId` must name
    /// `article`.
    pub fn into_comment(self, article: Article) -> ApplicationResult<Comment> {
        if self.id.is_some() {
            return Err(ApplicationError::validation(
                "a new comment must not carry an id",
            ));
        }
        if let Some(requested) = self.article_id {
            if article.id.map(i64::from) != Some(requested) {
                return Err(ApplicationError::validation(
                    "articleId does not match the target article",
                ));
            }
        }
        Ok(Comment::new(article, self.nickname, self.body)?)
    }
}
