//! PreferenceStore port - durable local copy of the preference record.
//!
//! The record and the remote identifier are stored under separate keys so
//! clearing a stale identifier never rewrites the preference blob.
//! Store failures are never surfaced to the user: callers log them and the
//! in-memory state remains authoritative.

use async_trait::async_trait;

use crate::domain::{PreferenceRecord, RemoteProfileId};

/// Errors from local preference persistence.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceStoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize preferences: {0}")]
    Serialization(String),
}

/// Durable, client-resident storage for the preference record.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Load the stored record.
    ///
    /// Returns `None` when nothing is stored or the stored data is
    /// corrupt - corruption is treated as absence, defaults win.
    async fn load(&self) -> Option<PreferenceRecord>;

    /// Overwrite the stored record.
    async fn save(&self, record: &PreferenceRecord) -> Result<(), PreferenceStoreError>;

    /// Load the remote profile identifier, if one was ever persisted.
    async fn load_remote_id(&self) -> Option<RemoteProfileId>;

    /// Persist the remote profile identifier for reuse across sessions.
    async fn save_remote_id(&self, id: &RemoteProfileId) -> Result<(), PreferenceStoreError>;

    /// Discard the remote profile identifier (stale after a remote 404).
    async fn clear_remote_id(&self) -> Result<(), PreferenceStoreError>;
}
