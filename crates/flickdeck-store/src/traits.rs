use async_trait::async_trait;
use flickdeck_models::{Profile, WatchlistEntry};

use crate::error::StoreError;

/// Per-user watchlist persistence, unique on `(user_id, movie_id)`.
#[async_trait]
pub trait WatchlistStore: Send + Sync {
    /// One-shot membership check. Called once per (screen, movie) pair on
    /// mount; results are never cached across screens.
    async fn contains(&self, user_id: &str, movie_id: u64) -> Result<bool, StoreError>;

    /// Insert a denormalized snapshot. A uniqueness conflict on
    /// `(user_id, movie_id)` is treated as success, not an error.
    async fn insert(&self, entry: &WatchlistEntry) -> Result<(), StoreError>;

    async fn remove(&self, user_id: &str, movie_id: u64) -> Result<(), StoreError>;

    /// All entries for a user, newest first.
    async fn entries(&self, user_id: &str) -> Result<Vec<WatchlistEntry>, StoreError>;
}

/// Read-only access to the `profiles` table.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError>;
}
