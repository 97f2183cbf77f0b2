// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;

/// One row of the `articles` table.
///
/// `id` stays `None` until the store assigns it on first save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub id: Option<ArticleId>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Article {
    pub fn new(
        id: Option<ArticleId>,
        title: Option<String>,
        content: Option<String>,
    ) -> Self {
        Self { id, title, content }
    }

    /// Copy every present field of `incoming` onto `self`. The key is never touched.
    pub fn patch(&mut self, incoming: Article) {
        if let Some(title) = incoming.title {
            self.title = Some(title);
        }
        if let Some(content) = incoming.content {
            self.content = Some(content);
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
