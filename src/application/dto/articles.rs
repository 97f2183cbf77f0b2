use crate::domain::article::{Article, ArticleId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::form_fields;

/// Fields posted by the write form. Never carries a key.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ArticleDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ArticleDto {
    pub fn to_entity(&self) -> Article {
        Article::new(None, self.title.clone(), self.content.clone())
    }
}

/// Fields posted by the edit form and the JSON API.
///
/// `id` correlates the request with a stored article; it must be absent when
/// creating.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ArticleForm {
    #[serde(default, deserialize_with = "form_fields::optional_key")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ArticleForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn to_entity(&self) -> Article {
        Article::new(
            self.id.map(ArticleId),
            self.title.clone(),
            self.content.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.map(Into::into),
            title: article.title,
            content: article.content,
        }
    }
}
