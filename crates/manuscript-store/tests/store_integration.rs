#![cfg(feature = "integration-tests")]

//! Store integration tests against a real PostgreSQL database.
//!
//! Requires `DATABASE_URL` pointing at a running instance:
//!
//! ```bash
//! cargo test -p manuscript-store --features integration-tests
//! ```

use manuscript_store::{NewChapter, NewProject, Store, StoreConfig, StoreError};

async fn connect() -> Store {
    let config = StoreConfig::from_env().expect("DATABASE_URL must be set");
    Store::connect(config)
        .await
        .expect("failed to connect to database")
}

#[tokio::test]
async fn migrations_leave_schema_initialized() {
    let store = connect().await;

    let initialized = manuscript_store::schema::is_schema_initialized(store.pool())
        .await
        .unwrap();
    assert!(initialized);
}

#[tokio::test]
async fn project_round_trip() {
    let store = connect().await;

    let created = store
        .insert_project(&NewProject::new("Integration round trip"))
        .await
        .unwrap();
    assert_eq!(created.status, "draft");

    let fetched = store.get_project(created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "Integration round trip");

    store.delete_project(created.id).await.unwrap();
}

#[tokio::test]
async fn missing_project_is_not_found() {
    let store = connect().await;

    let err = store.get_project(i64::MAX).await.unwrap_err();
    assert!(matches!(err, StoreError::ProjectNotFound(_)));

    let err = store
        .insert_chapter(&NewChapter::new(i64::MAX, "Orphan"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::ProjectNotFound(_)));
}

#[tokio::test]
async fn chapters_order_with_insertion_tiebreak() {
    let store = connect().await;

    let project = store
        .insert_project(&NewProject::new("Ordering"))
        .await
        .unwrap();

    let second = store
        .insert_chapter(&NewChapter::new(project.id, "Second").order(2))
        .await
        .unwrap();
    let first = store
        .insert_chapter(&NewChapter::new(project.id, "First").order(1))
        .await
        .unwrap();
    // Same order value as `first`; inserted later, so it lists after it.
    let tie = store
        .insert_chapter(&NewChapter::new(project.id, "Tie").order(1))
        .await
        .unwrap();

    let chapters = store.list_chapters(project.id).await.unwrap();
    let ids: Vec<i64> = chapters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, tie.id, second.id]);

    store.delete_project(project.id).await.unwrap();
}

#[tokio::test]
async fn deleting_project_cascades_to_chapters() {
    let store = connect().await;

    let project = store
        .insert_project(&NewProject::new("Cascade"))
        .await
        .unwrap();
    let chapter = store
        .insert_chapter(&NewChapter::new(project.id, "Doomed").content("gone soon"))
        .await
        .unwrap();

    store.delete_project(project.id).await.unwrap();

    let remaining: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM chapters WHERE id = $1")
        .bind(chapter.id)
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(remaining.0, 0);

    let err = store.delete_project(project.id).await.unwrap_err();
    assert!(matches!(err, StoreError::ProjectNotFound(_)));
}
