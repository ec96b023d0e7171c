use async_trait::async_trait;
use flickdeck_config::StoreConfig;
use flickdeck_models::{Profile, WatchlistEntry};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::traits::{ProfileStore, WatchlistStore};

/// PostgREST-style client for the remote data store.
///
/// Rows are addressed with `column=eq.value` filters; the anon key rides
/// on every request as both `apikey` and bearer token, with the user's
/// access token substituted for the bearer once signed in.
pub struct RestStore {
    client: Client,
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
}

impl RestStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            access_token: None,
        }
    }

    /// Use the signed-in user's token for row-level access.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.anon_key);
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", bearer))
    }

    async fn check_read(&self, response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Store read failed");
            return Err(StoreError::Unavailable {
                status: Some(status),
                message: format!("HTTP {}: {}", status, body),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl WatchlistStore for RestStore {
    async fn contains(&self, user_id: &str, movie_id: u64) -> Result<bool, StoreError> {
        let url = format!(
            "{}?select=movie_id&user_id=eq.{}&movie_id=eq.{}",
            self.table_url("watchlist"),
            user_id,
            movie_id
        );

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(StoreError::transport)?;
        let response = self.check_read(response).await?;

        let rows: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(!rows.is_empty())
    }

    async fn insert(&self, entry: &WatchlistEntry) -> Result<(), StoreError> {
        let response = self
            .authorize(self.client.post(self.table_url("watchlist")))
            .header("Prefer", "return=minimal")
            .json(entry)
            .send()
            .await
            .map_err(StoreError::transport)?;

        let status = response.status();
        // The uniqueness constraint on (user_id, movie_id) rejects rapid
        // double-submission; the row already being there is the outcome the
        // caller wanted.
        if status == StatusCode::CONFLICT {
            debug!(
                user_id = %entry.user_id,
                movie_id = entry.movie_id,
                "Watchlist insert hit uniqueness constraint, treating as success"
            );
            return Ok(());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Watchlist insert failed");
            return Err(StoreError::write(status, body));
        }
        Ok(())
    }

    async fn remove(&self, user_id: &str, movie_id: u64) -> Result<(), StoreError> {
        let url = format!(
            "{}?user_id=eq.{}&movie_id=eq.{}",
            self.table_url("watchlist"),
            user_id,
            movie_id
        );

        let response = self
            .authorize(self.client.delete(&url))
            .send()
            .await
            .map_err(StoreError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Watchlist delete failed");
            return Err(StoreError::write(status, body));
        }
        Ok(())
    }

    async fn entries(&self, user_id: &str) -> Result<Vec<WatchlistEntry>, StoreError> {
        let url = format!(
            "{}?select=*&user_id=eq.{}&order=created_at.desc",
            self.table_url("watchlist"),
            user_id
        );

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(StoreError::transport)?;
        let response = self.check_read(response).await?;

        response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ProfileStore for RestStore {
    async fn profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        let url = format!("{}?select=*&id=eq.{}", self.table_url("profiles"), user_id);

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(StoreError::transport)?;
        let response = self.check_read(response).await?;

        let mut rows: Vec<Profile> = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RestStore {
        RestStore::new(&StoreConfig {
            url: "https://example.supabase.co/".to_string(),
            anon_key: "anon".to_string(),
        })
    }

    #[test]
    fn test_table_url_strips_trailing_slash() {
        assert_eq!(
            store().table_url("watchlist"),
            "https://example.supabase.co/rest/v1/watchlist"
        );
    }

    #[test]
    fn test_entry_serializes_without_created_at_when_unset() {
        let entry = WatchlistEntry {
            user_id: "user-1".to_string(),
            movie_id: 603,
            title: "The Matrix".to_string(),
            poster_path: Some("/matrix.jpg".to_string()),
            backdrop_path: None,
            overview: "A hacker discovers reality is a simulation.".to_string(),
            release_date: "1999-03-30".to_string(),
            vote_average: 8.2,
            created_at: None,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["movie_id"], 603);
        assert_eq!(json["backdrop_path"], serde_json::Value::Null);
        // created_at is assigned by the store, never sent on insert
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_entries_row_deserializes_with_created_at() {
        let json = r#"[{
            "user_id": "user-1",
            "movie_id": 603,
            "title": "The Matrix",
            "poster_path": "/matrix.jpg",
            "backdrop_path": null,
            "overview": "",
            "release_date": "1999-03-30",
            "vote_average": 8.2,
            "created_at": "2024-06-01T12:00:00Z"
        }]"#;

        let rows: Vec<WatchlistEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].created_at.is_some());
    }
}
