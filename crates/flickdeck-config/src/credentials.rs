use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
struct CredentialsData {
    #[serde(flatten)]
    data: HashMap<String, String>,
}

/// Key/value credential file. Holds the persisted session between runs.
pub struct CredentialStore {
    path: PathBuf,
    credentials: HashMap<String, String>,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            credentials: HashMap::new(),
        }
    }

    pub fn load(&mut self) -> Result<()> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            let creds_data: CredentialsData = toml::from_str(&content)?;
            self.credentials = creds_data.data;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let creds_data = CredentialsData {
            data: self.credentials.clone(),
        };
        let content = toml::to_string_pretty(&creds_data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.credentials.get(key)
    }

    pub fn set(&mut self, key: String, value: String) {
        self.credentials.insert(key, value);
    }

    pub fn remove(&mut self, key: &str) {
        self.credentials.remove(key);
    }

    // Session convenience methods
    pub fn get_session_user_id(&self) -> Option<&String> {
        self.get("session_user_id")
    }

    pub fn set_session_user_id(&mut self, user_id: String) {
        self.set("session_user_id".to_string(), user_id);
    }

    pub fn get_session_access_token(&self) -> Option<&String> {
        self.get("session_access_token")
    }

    pub fn set_session_access_token(&mut self, token: String) {
        self.set("session_access_token".to_string(), token);
    }

    pub fn get_session_expires(&self) -> Option<DateTime<Utc>> {
        self.get("session_expires")
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn set_session_expires(&mut self, expires: DateTime<Utc>) {
        self.set("session_expires".to_string(), expires.to_rfc3339());
    }

    pub fn clear_session(&mut self) {
        self.remove("session_user_id");
        self.remove("session_access_token");
        self.remove("session_expires");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_credential_store_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();

        let mut store = CredentialStore::new(path.clone());
        store.set_session_user_id("user-1".to_string());
        store.set_session_access_token("token".to_string());
        store.save().unwrap();

        let mut loaded = CredentialStore::new(path);
        loaded.load().unwrap();
        assert_eq!(loaded.get_session_user_id(), Some(&"user-1".to_string()));
        assert_eq!(loaded.get_session_access_token(), Some(&"token".to_string()));
    }

    #[test]
    fn test_credential_store_session_expires() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();

        let mut store = CredentialStore::new(path.clone());
        let expires = Utc::now() + chrono::Duration::hours(1);
        store.set_session_expires(expires);
        store.save().unwrap();

        let mut loaded = CredentialStore::new(path);
        loaded.load().unwrap();
        let loaded_expires = loaded.get_session_expires().unwrap();
        // Allow 1 second difference for serialization
        assert!((loaded_expires - expires).num_seconds().abs() < 2);
    }

    #[test]
    fn test_clear_session_removes_all_keys() {
        let mut store = CredentialStore::new(PathBuf::from("/tmp/test"));
        store.set_session_user_id("user-1".to_string());
        store.set_session_access_token("token".to_string());
        store.set_session_expires(Utc::now());

        store.clear_session();
        assert_eq!(store.get_session_user_id(), None);
        assert_eq!(store.get_session_access_token(), None);
        assert!(store.get_session_expires().is_none());
    }
}
