//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p linksaver-storage -- --ignored pg_

#![allow(clippy::unwrap_used, reason = "integration test code")]

use std::sync::Arc;

use linksaver_core::NewBookmark;
use linksaver_storage::{BookmarkStore, PgStorage};
use uuid::Uuid;

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

fn unique_user() -> String {
    format!("test-user-{}", Uuid::new_v4())
}

fn make_bookmark(user_id: &str, url: &str, tags: &[&str]) -> NewBookmark {
    NewBookmark {
        user_id: user_id.to_owned(),
        url: url.to_owned(),
        title: format!("Title {url}"),
        favicon_url: Some("https://example.com/favicon.ico".to_owned()),
        summary: "Integration summary".to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
    }
}

#[tokio::test]
#[ignore]
async fn pg_append_and_list() {
    let storage = create_pg_storage().await;
    let user = unique_user();

    let first = storage.append_bookmark(&make_bookmark(&user, "https://a.example", &["rust"])).await.unwrap();
    let second = storage.append_bookmark(&make_bookmark(&user, "https://b.example", &[])).await.unwrap();
    assert_eq!(first.position, 0);
    assert_eq!(second.position, 1);
    assert_eq!(first.tags, vec!["rust".to_owned()]);

    let listed = storage.list_bookmarks(&user).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);
}

#[tokio::test]
#[ignore]
async fn pg_concurrent_appends_get_distinct_positions() {
    let storage = Arc::new(create_pg_storage().await);
    let user = unique_user();
    let mut handles = Vec::new();
    for i in 0..10 {
        let storage = Arc::clone(&storage);
        let user = user.clone();
        handles.push(tokio::spawn(async move {
            storage
                .append_bookmark(&make_bookmark(&user, &format!("https://example.com/{i}"), &[]))
                .await
                .unwrap()
                .position
        }));
    }
    let mut positions = Vec::new();
    for handle in handles {
        positions.push(handle.await.unwrap());
    }
    positions.sort_unstable();
    assert_eq!(positions, (0..10).collect::<Vec<i32>>());
}

#[tokio::test]
#[ignore]
async fn pg_reindex_rewrites_positions() {
    let storage = create_pg_storage().await;
    let user = unique_user();
    let a = storage.append_bookmark(&make_bookmark(&user, "https://a.example", &[])).await.unwrap();
    let b = storage.append_bookmark(&make_bookmark(&user, "https://b.example", &[])).await.unwrap();
    let c = storage.append_bookmark(&make_bookmark(&user, "https://c.example", &[])).await.unwrap();

    let changed = storage
        .reindex_bookmarks(&user, &[c.id.clone(), a.id.clone(), b.id.clone()])
        .await
        .unwrap();
    assert_eq!(changed, 3);

    let listed: Vec<(String, i32)> =
        storage.list_bookmarks(&user).await.unwrap().into_iter().map(|b| (b.id, b.position)).collect();
    assert_eq!(listed, vec![(c.id, 0), (a.id, 1), (b.id, 2)]);
}

#[tokio::test]
#[ignore]
async fn pg_cross_user_writes_are_no_ops() {
    let storage = create_pg_storage().await;
    let owner = unique_user();
    let intruder = unique_user();
    let mine = storage.append_bookmark(&make_bookmark(&owner, "https://a.example", &[])).await.unwrap();
    let other = storage.append_bookmark(&make_bookmark(&owner, "https://b.example", &[])).await.unwrap();

    assert!(!storage.delete_bookmark(&intruder, &mine.id).await.unwrap());
    assert_eq!(storage.reindex_bookmarks(&intruder, &[other.id.clone(), mine.id.clone()]).await.unwrap(), 0);
    assert!(storage.get_bookmark(&intruder, &mine.id).await.unwrap().is_none());

    let listed = storage.list_bookmarks(&owner).await.unwrap();
    assert_eq!(listed[0].id, mine.id);
    assert_eq!(listed[0].position, 0);

    assert!(storage.delete_bookmark(&owner, &mine.id).await.unwrap());
}
