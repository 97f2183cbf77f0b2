mod create;
mod service;

pub use service::CommentCommandService;
