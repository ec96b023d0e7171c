use async_trait::async_trait;
use chrono::Utc;
use flickdeck_models::{Profile, WatchlistEntry};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::StoreError;
use crate::traits::{ProfileStore, WatchlistStore};

/// In-memory store with the same contract as the remote one, including
/// the `(user_id, movie_id)` uniqueness constraint. Used by tests and by
/// offline runs.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<WatchlistEntry>>,
    profiles: Mutex<Vec<Profile>>,
    write_calls: AtomicUsize,
    read_calls: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent insert/remove fail, simulating a store outage.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.write_calls() + self.read_calls()
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn add_profile(&self, profile: Profile) {
        self.profiles.lock().unwrap().push(profile);
    }
}

#[async_trait]
impl WatchlistStore for MemoryStore {
    async fn contains(&self, user_id: &str, movie_id: u64) -> Result<bool, StoreError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .any(|e| e.user_id == user_id && e.movie_id == movie_id))
    }

    async fn insert(&self, entry: &WatchlistEntry) -> Result<(), StoreError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed {
                message: "simulated store outage".to_string(),
            });
        }

        let mut rows = self.rows.lock().unwrap();
        // Uniqueness constraint: a duplicate insert is a no-op success,
        // matching the remote store's conflict handling
        if rows
            .iter()
            .any(|e| e.user_id == entry.user_id && e.movie_id == entry.movie_id)
        {
            return Ok(());
        }

        let mut stored = entry.clone();
        stored.created_at = Some(Utc::now());
        rows.push(stored);
        Ok(())
    }

    async fn remove(&self, user_id: &str, movie_id: u64) -> Result<(), StoreError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed {
                message: "simulated store outage".to_string(),
            });
        }

        let mut rows = self.rows.lock().unwrap();
        rows.retain(|e| !(e.user_id == user_id && e.movie_id == movie_id));
        Ok(())
    }

    async fn entries(&self, user_id: &str) -> Result<Vec<WatchlistEntry>, StoreError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        let mut entries: Vec<WatchlistEntry> = rows
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        let profiles = self.profiles.lock().unwrap();
        Ok(profiles.iter().find(|p| p.id == user_id).cloned())
    }
}
