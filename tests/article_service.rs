// tests/article_service.rs
use green_board::application::dto::{ArticleForm, CommentDto};
use green_board::application::error::ApplicationError;
use green_board::domain::article::ArticleRepository;
use green_board::domain::errors::DomainError;
use green_board::infrastructure::repositories::InMemoryStore;
use std::sync::Arc;

mod support;

fn setup() -> (green_board::application::services::ApplicationServices, InMemoryStore) {
    let store = InMemoryStore::new();
    (support::build_services(&store), store)
}

#[tokio::test]
async fn create_then_list_shows_the_new_article() {
    let (services, _store) = setup();

    let created = services
        .article_commands
        .create(ArticleForm::new("aaa", "test"))
        .await
        .unwrap()
        .expect("created");
    assert!(created.id.is_some());

    let all = services.article_queries.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, created.id);
    assert_eq!(all[0].title.as_deref(), Some("aaa"));
    assert_eq!(all[0].content.as_deref(), Some("test"));
}

#[tokio::test]
async fn list_is_empty_without_articles() {
    let (services, _store) = setup();
    assert!(services.article_queries.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_with_preset_id_persists_nothing() {
    let (services, store) = setup();

    let result = services
        .article_commands
        .create(ArticleForm::new("aaa", "test").with_id(1))
        .await
        .unwrap();

    assert!(result.is_none());
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn show_returns_matching_article_or_none() {
    let (services, _store) = setup();
    let created = services
        .article_commands
        .create(ArticleForm::new("t", "c"))
        .await
        .unwrap()
        .unwrap();
    let id = i64::from(created.id.unwrap());

    let found = services.article_queries.show(id).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);

    assert!(services.article_queries.show(id + 1).await.unwrap().is_none());
    assert!(services.article_queries.show(-1).await.unwrap().is_none());
}

#[tokio::test]
async fn update_patches_only_present_fields() {
    let (services, _store) = setup();
    let created = services
        .article_commands
        .create(ArticleForm::new("old title", "old content"))
        .await
        .unwrap()
        .unwrap();
    let id = i64::from(created.id.unwrap());

    let patch = ArticleForm {
        id: Some(id),
        title: Some("new title".into()),
        content: None,
    };
    let updated = services
        .article_commands
        .update(id, patch)
        .await
        .unwrap()
        .expect("updated");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title.as_deref(), Some("new title"));
    assert_eq!(updated.content.as_deref(), Some("old content"));

    let stored = services.article_queries.show(id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn update_with_mismatched_id_changes_nothing() {
    let (services, _store) = setup();
    let first = services
        .article_commands
        .create(ArticleForm::new("first", "1"))
        .await
        .unwrap()
        .unwrap();
    let second = services
        .article_commands
        .create(ArticleForm::new("second", "2"))
        .await
        .unwrap()
        .unwrap();
    let first_id = i64::from(first.id.unwrap());
    let second_id = i64::from(second.id.unwrap());

    let result = services
        .article_commands
        .update(first_id, ArticleForm::new("hijack", "x").with_id(second_id))
        .await
        .unwrap();
    assert!(result.is_none());

    // a form without any id does not match the path either
    let result = services
        .article_commands
        .update(first_id, ArticleForm::new("hijack", "x"))
        .await
        .unwrap();
    assert!(result.is_none());

    let all = services.article_queries.list().await.unwrap();
    assert_eq!(all, vec![first, second]);
}

#[tokio::test]
async fn update_of_missing_article_returns_none() {
    let (services, store) = setup();

    let result = services
        .article_commands
        .update(7, ArticleForm::new("t", "c").with_id(7))
        .await
        .unwrap();

    assert!(result.is_none());
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_returns_snapshot_and_removes_row() {
    let (services, _store) = setup();
    let created = services
        .article_commands
        .create(ArticleForm::new("bye", "soon"))
        .await
        .unwrap()
        .unwrap();
    let id = i64::from(created.id.unwrap());

    let deleted = services.article_commands.delete(id).await.unwrap();
    assert_eq!(deleted, Some(created));
    assert!(services.article_queries.show(id).await.unwrap().is_none());

    assert!(services.article_commands.delete(id).await.unwrap().is_none());
}

#[tokio::test]
async fn bulk_insert_without_transaction_keeps_partial_writes() {
    let (services, store) = setup();

    let err = services
        .article_commands
        .create_articles(support::numbered_forms("bulk", 3))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::ForcedFailure(ref msg) if msg == "결재 실패!!!"));
    let stored = store.find_all().await.unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[2].title.as_deref(), Some("bulk 3"));
}

#[tokio::test]
async fn bulk_insert_in_transaction_rolls_back_everything() {
    let (services, store) = setup();
    services
        .article_commands
        .create(ArticleForm::new("existing", "kept"))
        .await
        .unwrap()
        .unwrap();

    let err = services
        .article_commands
        .create_articles_transactional(support::numbered_forms("bulk", 3))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::ForcedFailure(_)));
    let stored = store.find_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title.as_deref(), Some("existing"));

    // the store stays usable once the transaction is gone
    services
        .article_commands
        .create(ArticleForm::new("after", "rollback"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(store.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn storage_failures_surface_as_errors() {
    let services = green_board::application::services::ApplicationServices::new(
        Arc::new(support::UnavailableArticleStore),
        Arc::new(support::UnavailableArticleStore),
        Arc::new(InMemoryStore::new()),
    );

    let err = services.article_queries.list().await.unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Persistence(_))));

    let err = services
        .article_commands
        .create_articles_transactional(support::numbered_forms("x", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Persistence(_))));
}

#[tokio::test]
async fn comments_are_created_and_listed_per_article() {
    let (services, _store) = setup();
    let article = services
        .article_commands
        .create(ArticleForm::new("with comments", "body"))
        .await
        .unwrap()
        .unwrap();
    let article_id = i64::from(article.id.unwrap());

    let created = services
        .comment_commands
        .create_comment(
            article_id,
            CommentDto {
                nickname: Some("Park".into()),
                body: Some("first!".into()),
                ..CommentDto::default()
            },
        )
        .await
        .unwrap();
    assert!(created.id.is_some());
    assert_eq!(created.article_id, Some(article_id));

    let listed = services
        .comment_queries
        .comments_for_article(article_id)
        .await
        .unwrap();
    assert_eq!(listed, vec![created]);

    let none = services
        .comment_queries
        .comments_for_article(article_id + 100)
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn comment_for_missing_article_is_not_found() {
    let (services, _store) = setup();

    let err = services
        .comment_commands
        .create_comment(5, CommentDto::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(DomainError::NotFound(_))));
}

#[tokio::test]
async fn comment_with_preset_id_is_rejected() {
    let (services, _store) = setup();
    let article = services
        .article_commands
        .create(ArticleForm::new("t", "c"))
        .await
        .unwrap()
        .unwrap();

    let err = services
        .comment_commands
        .create_comment(
            i64::from(article.id.unwrap()),
            CommentDto {
                id: Some(9),
                ..CommentDto::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(DomainError::Validation(_))));
}
