// src/application/queries/articles/mod.rs
mod list;
mod service;
mod show;

pub use service::ArticleQueryService;
