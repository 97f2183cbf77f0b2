// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::article::{ArticleRepository, ArticleUnitOfWork};

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) unit_of_work: Arc<dyn ArticleUnitOfWork>,
}

impl ArticleCommandService {
    pub fn new(
        repo: Arc<dyn ArticleRepository>,
        unit_of_work: Arc<dyn ArticleUnitOfWork>,
    ) -> Self {
        Self { repo, unit_of_work }
    }
}
