//! Behavior of the bounded activity cache over an in-memory list backend.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bookcase_core::activity::{ActivityBackend, ActivityCache, UserActivityRecord};
use bookcase_core::{CatalogError, CatalogResult};
use pretty_assertions::assert_eq;

/// List store kept in process memory, with switchable failure injection.
#[derive(Default)]
struct MemoryBackend {
    lists: Mutex<HashMap<String, Vec<String>>>,
    fail_push: AtomicBool,
    fail_trim: AtomicBool,
}

impl MemoryBackend {
    fn list(&self, key: &str) -> Vec<String> {
        self.lists
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    fn seed(&self, key: &str, entries: &[&str]) {
        self.lists.lock().unwrap().insert(
            key.to_owned(),
            entries.iter().map(|entry| (*entry).to_owned()).collect(),
        );
    }
}

#[async_trait]
impl ActivityBackend for MemoryBackend {
    async fn push_front(&self, key: &str, value: &str) -> CatalogResult<()> {
        if self.fail_push.load(Ordering::SeqCst) {
            return Err(CatalogError::store("push refused"));
        }
        self.lists
            .lock()
            .unwrap()
            .entry(key.to_owned())
            .or_default()
            .insert(0, value.to_owned());
        Ok(())
    }

    async fn trim(&self, key: &str, start: isize, stop: isize) -> CatalogResult<()> {
        if self.fail_trim.load(Ordering::SeqCst) {
            return Err(CatalogError::store("trim refused"));
        }
        let mut lists = self.lists.lock().unwrap();
        if let Some(list) = lists.get_mut(key) {
            let start = start.max(0) as usize;
            let stop = (stop.max(-1) + 1) as usize;
            *list = list
                .iter()
                .skip(start)
                .take(stop.saturating_sub(start))
                .cloned()
                .collect();
        }
        Ok(())
    }

    async fn range(&self, key: &str, start: isize, stop: isize) -> CatalogResult<Vec<String>> {
        let lists = self.lists.lock().unwrap();
        let Some(list) = lists.get(key) else {
            return Ok(Vec::new());
        };
        let start = start.max(0) as usize;
        let stop = (stop.max(-1) + 1) as usize;
        Ok(list
            .iter()
            .skip(start)
            .take(stop.saturating_sub(start))
            .cloned()
            .collect())
    }
}

fn record(index: usize) -> UserActivityRecord {
    UserActivityRecord::new("GET", format!("/book/{index}"))
}

#[tokio::test]
async fn history_stays_within_capacity_after_every_write() {
    for capacity in 1..=4 {
        let backend = Arc::new(MemoryBackend::default());
        let cache = ActivityCache::with_capacity(Arc::clone(&backend), capacity);

        for index in 0..10 {
            cache.write("alice", &record(index)).await.unwrap();

            let stored = backend.list("alice");
            assert!(
                stored.len() <= capacity,
                "capacity {} exceeded after write {}: {} entries",
                capacity,
                index,
                stored.len()
            );

            let history = cache.read("alice").await.unwrap();
            assert_eq!(history[0], record(index), "newest record must be first");
        }
    }
}

#[tokio::test]
async fn read_is_newest_first_and_truncated() {
    let cache = ActivityCache::new(Arc::new(MemoryBackend::default()));

    for index in 0..5 {
        cache.write("bob", &record(index)).await.unwrap();
    }

    let history = cache.read("bob").await.unwrap();
    assert_eq!(history, vec![record(4), record(3), record(2)]);
}

#[tokio::test]
async fn unknown_key_reads_as_empty_history() {
    let cache = ActivityCache::new(Arc::new(MemoryBackend::default()));

    let history = cache.read("nobody").await.unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn trim_failure_is_reported_but_push_is_not_rolled_back() {
    let backend = Arc::new(MemoryBackend::default());
    let cache = ActivityCache::with_capacity(Arc::clone(&backend), 2);

    for index in 0..2 {
        cache.write("carol", &record(index)).await.unwrap();
    }

    backend.fail_trim.store(true, Ordering::SeqCst);
    let result = cache.write("carol", &record(2)).await;
    assert!(matches!(result, Err(CatalogError::Store { .. })));

    // The push went through: the new record is visible, alongside the
    // excess entry the failed trim left behind.
    let stored = backend.list("carol");
    assert_eq!(stored.len(), 3);
    let newest: UserActivityRecord = serde_json::from_str(&stored[0]).unwrap();
    assert_eq!(newest, record(2));
}

#[tokio::test]
async fn push_failure_leaves_history_untouched() {
    let backend = Arc::new(MemoryBackend::default());
    let cache = ActivityCache::new(Arc::clone(&backend));

    cache.write("dave", &record(0)).await.unwrap();

    backend.fail_push.store(true, Ordering::SeqCst);
    let result = cache.write("dave", &record(1)).await;
    assert!(matches!(result, Err(CatalogError::Store { .. })));

    let history = cache.read("dave").await.unwrap();
    assert_eq!(history, vec![record(0)]);
}

#[tokio::test]
async fn foreign_data_under_a_key_is_a_serialization_error() {
    let backend = Arc::new(MemoryBackend::default());
    let cache = ActivityCache::new(Arc::clone(&backend));

    backend.seed("eve", &["not json at all"]);

    let result = cache.read("eve").await;
    assert!(matches!(result, Err(CatalogError::Serialization(_))));
}

#[tokio::test]
async fn default_capacity_is_three() {
    let cache = ActivityCache::new(Arc::new(MemoryBackend::default()));
    assert_eq!(cache.capacity(), 3);
}
