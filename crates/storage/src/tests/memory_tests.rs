use std::sync::Arc;

use super::{create_test_storage, new_bookmark};
use crate::traits::BookmarkStore;

async fn seed(storage: &impl BookmarkStore, user_id: &str, count: usize) -> Vec<String> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let stored = storage
            .append_bookmark(&new_bookmark(user_id, &format!("https://example.com/{i}")))
            .await
            .unwrap();
        ids.push(stored.id);
    }
    ids
}

async fn positions(storage: &impl BookmarkStore, user_id: &str) -> Vec<(String, i32)> {
    storage
        .list_bookmarks(user_id)
        .await
        .unwrap()
        .into_iter()
        .map(|b| (b.id, b.position))
        .collect()
}

#[tokio::test]
async fn append_assigns_increasing_positions() {
    let storage = create_test_storage();
    let first = storage.append_bookmark(&new_bookmark("u1", "https://a.example")).await.unwrap();
    let second = storage.append_bookmark(&new_bookmark("u1", "https://b.example")).await.unwrap();
    assert_eq!(first.position, 0);
    assert_eq!(second.position, 1);
    assert_ne!(first.id, second.id);
    assert_eq!(second.summary, "Summary of https://b.example");
}

#[tokio::test]
async fn positions_are_per_user() {
    let storage = create_test_storage();
    seed(&storage, "u1", 3).await;
    let other = storage.append_bookmark(&new_bookmark("u2", "https://x.example")).await.unwrap();
    assert_eq!(other.position, 0);
}

#[tokio::test]
async fn append_after_gap_uses_max_plus_one() {
    let storage = create_test_storage();
    let ids = seed(&storage, "u1", 3).await;
    assert!(storage.delete_bookmark("u1", &ids[1]).await.unwrap());
    let next = storage.append_bookmark(&new_bookmark("u1", "https://late.example")).await.unwrap();
    assert_eq!(next.position, 3);
}

#[tokio::test]
async fn concurrent_appends_never_share_a_position() {
    let storage = Arc::new(create_test_storage());
    let mut handles = Vec::new();
    for i in 0..32 {
        let storage = Arc::clone(&storage);
        handles.push(tokio::spawn(async move {
            storage
                .append_bookmark(&new_bookmark("racer", &format!("https://example.com/{i}")))
                .await
                .unwrap()
                .position
        }));
    }
    let mut seen = Vec::new();
    for handle in handles {
        seen.push(handle.await.unwrap());
    }
    seen.sort_unstable();
    assert_eq!(seen, (0..32).collect::<Vec<i32>>());
}

#[tokio::test]
async fn list_is_ordered_by_position() {
    let storage = create_test_storage();
    let ids = seed(&storage, "u1", 3).await;
    storage.reindex_bookmarks("u1", &[ids[2].clone(), ids[0].clone(), ids[1].clone()]).await.unwrap();
    let listed: Vec<String> = positions(&storage, "u1").await.into_iter().map(|(id, _)| id).collect();
    assert_eq!(listed, vec![ids[2].clone(), ids[0].clone(), ids[1].clone()]);
}

#[tokio::test]
async fn reindex_is_idempotent() {
    let storage = create_test_storage();
    let ids = seed(&storage, "u1", 4).await;
    let order = vec![ids[3].clone(), ids[2].clone(), ids[0].clone(), ids[1].clone()];

    let changed = storage.reindex_bookmarks("u1", &order).await.unwrap();
    assert_eq!(changed, 4);
    let once = positions(&storage, "u1").await;

    let changed_again = storage.reindex_bookmarks("u1", &order).await.unwrap();
    assert_eq!(changed_again, 0);
    assert_eq!(positions(&storage, "u1").await, once);
}

#[tokio::test]
async fn reindex_counts_only_rows_that_moved() {
    let storage = create_test_storage();
    let ids = seed(&storage, "u1", 4).await;
    // ids[1] keeps position 1.
    let order = vec![ids[3].clone(), ids[1].clone(), ids[0].clone(), ids[2].clone()];

    let changed = storage.reindex_bookmarks("u1", &order).await.unwrap();
    assert_eq!(changed, 3);
    let listed: Vec<String> = positions(&storage, "u1").await.into_iter().map(|(id, _)| id).collect();
    assert_eq!(listed, order);
}

#[tokio::test]
async fn reindex_ignores_foreign_ids() {
    let storage = create_test_storage();
    let mine = seed(&storage, "u1", 2).await;
    let theirs = seed(&storage, "u2", 2).await;

    let order = vec![theirs[1].clone(), mine[1].clone(), theirs[0].clone(), mine[0].clone()];
    storage.reindex_bookmarks("u1", &order).await.unwrap();

    assert_eq!(positions(&storage, "u1").await, vec![(mine[1].clone(), 0), (mine[0].clone(), 1)]);
    assert_eq!(positions(&storage, "u2").await, vec![(theirs[0].clone(), 0), (theirs[1].clone(), 1)]);
}

#[tokio::test]
async fn reindex_closes_gaps_left_by_delete() {
    let storage = create_test_storage();
    let ids = seed(&storage, "u1", 3).await;
    storage.delete_bookmark("u1", &ids[0]).await.unwrap();
    storage.reindex_bookmarks("u1", &[ids[2].clone(), ids[1].clone()]).await.unwrap();
    assert_eq!(positions(&storage, "u1").await, vec![(ids[2].clone(), 0), (ids[1].clone(), 1)]);
}

#[tokio::test]
async fn reindex_without_bookmarks_is_a_no_op() {
    let storage = create_test_storage();
    assert_eq!(storage.reindex_bookmarks("nobody", &[]).await.unwrap(), 0);
    assert_eq!(storage.reindex_bookmarks("nobody", &["ghost".to_owned()]).await.unwrap(), 0);
}

#[tokio::test]
async fn delete_and_get_are_scoped_by_owner() {
    let storage = create_test_storage();
    let ids = seed(&storage, "u1", 1).await;

    assert!(storage.get_bookmark("u2", &ids[0]).await.unwrap().is_none());
    assert!(!storage.delete_bookmark("u2", &ids[0]).await.unwrap());
    assert!(storage.get_bookmark("u1", &ids[0]).await.unwrap().is_some());

    assert!(storage.delete_bookmark("u1", &ids[0]).await.unwrap());
    assert!(!storage.delete_bookmark("u1", &ids[0]).await.unwrap());
    assert!(storage.list_bookmarks("u1").await.unwrap().is_empty());
}
