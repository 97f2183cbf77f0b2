// src/application/commands/articles/mod.rs
mod bulk;
mod create;
mod delete;
mod service;
mod update;

pub use bulk::PAYMENT_PROBE_ID;
pub use service::ArticleCommandService;
