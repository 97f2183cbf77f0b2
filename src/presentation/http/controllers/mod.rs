// src/presentation/http/controllers/mod.rs
pub mod article_api;
pub mod articles;
pub mod comments;
