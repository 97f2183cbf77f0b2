use crate::domain::article::{Article, ArticleId};
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommentId(pub i64);

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

/// One row of the `comments` table together with the article it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Option<CommentId>,
    pub article: Article,
    pub nickname: Option<String>,
    pub body: Option<String>,
}

impl Comment {
    /// Build an unsaved comment attached to a persisted article.
    pub fn new(
        article: Article,
        nickname: Option<String>,
        body: Option<String>,
    ) -> DomainResult<Self> {
        if !article.is_persisted() {
            return Err(DomainError::Validation(
                "comment must belong to a saved article".into(),
            ));
        }
        Ok(Self {
            id: None,
            article,
            nickname,
            body,
        })
    }

    /// Key of the owning article.
    pub fn article_id(&self) -> Option<ArticleId> {
        self.article.id
    }
}
