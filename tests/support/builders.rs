// tests/support/builders.rs
use green_board::application::dto::ArticleForm;

/// Forms titled `<prefix> 1`, `<prefix> 2`, ... with matching contents.
pub fn numbered_forms(prefix: &str, count: usize) -> Vec<ArticleForm> {
    (1..=count)
        .map(|n| ArticleForm::new(format!("{prefix} {n}"), format!("content {n}")))
        .collect()
}
