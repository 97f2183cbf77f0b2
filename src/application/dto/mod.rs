pub mod articles;
pub mod comments;
pub mod form_fields;

pub use articles::{ArticleDto, ArticleForm, ArticleResponse};
pub use comments::CommentDto;
