pub mod entity;
pub mod repository;

pub use entity::{Comment, CommentId};
pub use repository::CommentRepository;
