//! In-memory preference store for testing.
//!
//! Deterministic, lock-based storage with counters and failure injection
//! so tests can assert persistence ordering without touching the
//! filesystem. Not intended for production use.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::domain::{PreferenceRecord, RemoteProfileId};
use crate::ports::{PreferenceStore, PreferenceStoreError};

/// In-memory implementation of [`PreferenceStore`].
#[derive(Default)]
pub struct InMemoryPreferenceStore {
    record: RwLock<Option<PreferenceRecord>>,
    remote_id: RwLock<Option<RemoteProfileId>>,
    save_count: AtomicUsize,
    fail_saves: AtomicBool,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing record.
    pub fn with_record(self, record: PreferenceRecord) -> Self {
        *self.record.write().expect("record lock poisoned") = Some(record);
        self
    }

    /// Seed the store with a known remote identifier.
    pub fn with_remote_id(self, id: RemoteProfileId) -> Self {
        *self.remote_id.write().expect("remote_id lock poisoned") = Some(id);
        self
    }

    /// Make subsequent `save` calls fail (storage-failure scenarios).
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful `save` calls (for ordering assertions).
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    /// Current stored remote identifier (for test assertions).
    pub fn remote_id(&self) -> Option<RemoteProfileId> {
        self.remote_id.read().expect("remote_id lock poisoned").clone()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn load(&self) -> Option<PreferenceRecord> {
        self.record.read().expect("record lock poisoned").clone()
    }

    async fn save(&self, record: &PreferenceRecord) -> Result<(), PreferenceStoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(PreferenceStoreError::Io("injected failure".to_string()));
        }
        *self.record.write().expect("record lock poisoned") = Some(record.clone());
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn load_remote_id(&self) -> Option<RemoteProfileId> {
        self.remote_id.read().expect("remote_id lock poisoned").clone()
    }

    async fn save_remote_id(&self, id: &RemoteProfileId) -> Result<(), PreferenceStoreError> {
        *self.remote_id.write().expect("remote_id lock poisoned") = Some(id.clone());
        Ok(())
    }

    async fn clear_remote_id(&self) -> Result<(), PreferenceStoreError> {
        *self.remote_id.write().expect("remote_id lock poisoned") = None;
        Ok(())
    }
}
