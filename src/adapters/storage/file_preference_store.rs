//! File-based Preference Store Adapter
//!
//! Stores the preference record as JSON and the remote identifier as a
//! bare string in two separate files. Keeping them apart means discarding
//! a stale identifier never touches the preference blob.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use crate::domain::{PreferenceRecord, RemoteProfileId};
use crate::ports::{PreferenceStore, PreferenceStoreError};

const PREFERENCES_FILE: &str = "preferences.json";
const REMOTE_ID_FILE: &str = "remote_id";

/// File-based storage for the preference record.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    base_path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a new file store rooted at a base directory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn preferences_path(&self) -> PathBuf {
        self.base_path.join(PREFERENCES_FILE)
    }

    fn remote_id_path(&self) -> PathBuf {
        self.base_path.join(REMOTE_ID_FILE)
    }

    async fn ensure_dir(&self) -> Result<(), PreferenceStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| PreferenceStoreError::Io(e.to_string()))
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn load(&self) -> Option<PreferenceRecord> {
        let path = self.preferences_path();
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read preferences, using defaults");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                // Corrupt data is treated as absent; defaults win.
                warn!(path = %path.display(), error = %e, "stored preferences are corrupt, using defaults");
                None
            }
        }
    }

    async fn save(&self, record: &PreferenceRecord) -> Result<(), PreferenceStoreError> {
        self.ensure_dir().await?;

        let json = serde_json::to_string(record)
            .map_err(|e| PreferenceStoreError::Serialization(e.to_string()))?;

        fs::write(self.preferences_path(), json)
            .await
            .map_err(|e| PreferenceStoreError::Io(e.to_string()))
    }

    async fn load_remote_id(&self) -> Option<RemoteProfileId> {
        let raw = fs::read_to_string(self.remote_id_path()).await.ok()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(RemoteProfileId::new(trimmed))
    }

    async fn save_remote_id(&self, id: &RemoteProfileId) -> Result<(), PreferenceStoreError> {
        self.ensure_dir().await?;

        fs::write(self.remote_id_path(), id.as_str())
            .await
            .map_err(|e| PreferenceStoreError::Io(e.to_string()))
    }

    async fn clear_remote_id(&self) -> Result<(), PreferenceStoreError> {
        match fs::remove_file(self.remote_id_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PreferenceStoreError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Feature, Need};
    use tempfile::TempDir;

    fn test_record() -> PreferenceRecord {
        let mut record = PreferenceRecord::default();
        record.set_needs(vec![Need::Visual, Need::Cognitive]);
        record.features.set(Feature::HighContrast, true);
        record
    }

    #[tokio::test]
    async fn load_on_empty_directory_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path());

        assert!(store.load().await.is_none());
        assert!(store.load_remote_id().await.is_none());
    }

    #[tokio::test]
    async fn save_then_load_returns_equal_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path());

        let record = test_record();
        store.save(&record).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn corrupt_preferences_are_treated_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path());

        std::fs::write(temp_dir.path().join(PREFERENCES_FILE), "not json{").unwrap();

        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn legacy_record_gains_narration_default_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path());

        // A record written before the narration feature key existed.
        std::fs::write(
            temp_dir.path().join(PREFERENCES_FILE),
            r#"{"needs": ["visual"], "features": {"Ativar alto contraste": true}}"#,
        )
        .unwrap();

        let loaded = store.load().await.unwrap();
        assert!(loaded.feature_enabled(Feature::Narration));
        assert!(loaded.feature_enabled(Feature::HighContrast));
    }

    #[tokio::test]
    async fn remote_id_round_trips_and_clears() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path());

        let id = RemoteProfileId::new("abc123");
        store.save_remote_id(&id).await.unwrap();
        assert_eq!(store.load_remote_id().await, Some(id));

        store.clear_remote_id().await.unwrap();
        assert!(store.load_remote_id().await.is_none());
    }

    #[tokio::test]
    async fn clear_remote_id_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path());

        store.clear_remote_id().await.unwrap();
        store.clear_remote_id().await.unwrap();
    }

    #[tokio::test]
    async fn clearing_remote_id_leaves_preferences_intact() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path());

        let record = test_record();
        store.save(&record).await.unwrap();
        store
            .save_remote_id(&RemoteProfileId::new("abc123"))
            .await
            .unwrap();

        store.clear_remote_id().await.unwrap();

        assert_eq!(store.load().await.unwrap(), record);
    }

    #[tokio::test]
    async fn save_overwrites_previous_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path());

        let mut record = test_record();
        store.save(&record).await.unwrap();

        record.features.set(Feature::SoundFeedback, true);
        record.set_needs(vec![Need::Motor]);
        store.save(&record).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.needs, vec![Need::Motor]);
        assert!(loaded.feature_enabled(Feature::SoundFeedback));
    }
}
