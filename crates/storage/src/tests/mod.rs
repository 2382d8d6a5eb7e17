//! Test utilities and module declarations for storage tests.

use linksaver_core::NewBookmark;

use crate::StorageBackend;

pub fn create_test_storage() -> StorageBackend {
    StorageBackend::new_memory()
}

pub fn new_bookmark(user_id: &str, url: &str) -> NewBookmark {
    NewBookmark {
        user_id: user_id.to_owned(),
        url: url.to_owned(),
        title: format!("Title of {url}"),
        favicon_url: None,
        summary: format!("Summary of {url}"),
        tags: vec!["test".to_owned()],
    }
}

mod memory_tests;
