// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, comments::CommentCommandService},
        queries::{articles::ArticleQueryService, comments::CommentQueryService},
    },
    domain::{
        article::{ArticleRepository, ArticleUnitOfWork},
        comment::CommentRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    article_repo: Arc<dyn ArticleRepository>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        article_unit_of_work: Arc<dyn ArticleUnitOfWork>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&article_unit_of_work),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_repo)));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&comment_repo),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(Arc::clone(&comment_repo)));

        Self {
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            article_repo,
        }
    }

    /// Direct repository access for the page controllers, which persist
    /// form submissions without going through the command service.
    pub fn article_repo(&self) -> Arc<dyn ArticleRepository> {
        Arc::clone(&self.article_repo)
    }
}
