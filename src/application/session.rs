//! AccessibilitySession - the single source of truth for needs and features.
//!
//! All preference mutations go through this container. Every mutation is
//! applied in memory, persisted to the local store in the same call, and
//! published on a watch channel that the sync coordinator and the feature
//! effectors observe independently. Local persistence failures are logged
//! and swallowed; the in-memory state stays authoritative and no mutation
//! can fail from the caller's point of view.

use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::{Feature, Need, PreferenceRecord};
use crate::ports::{ConnectivityProbe, PreferenceStore, ProfileClient};

/// Session-scoped accessibility state container.
pub struct AccessibilitySession {
    state: Mutex<PreferenceRecord>,
    store: Arc<dyn PreferenceStore>,
    changes: watch::Sender<PreferenceRecord>,
}

impl AccessibilitySession {
    /// Create a session with default preferences (empty needs, narration on).
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self::with_record(store, PreferenceRecord::default())
    }

    /// Create a session seeded with a specific record.
    pub fn with_record(store: Arc<dyn PreferenceStore>, record: PreferenceRecord) -> Self {
        let (changes, _) = watch::channel(record.clone());
        Self {
            state: Mutex::new(record),
            store,
            changes,
        }
    }

    /// Build a session from whatever state survives from earlier runs.
    ///
    /// Local storage wins when present (the narration default is applied
    /// there). When nothing is stored locally but a remote identifier is
    /// known and the network is up, the remote profile seeds the session;
    /// any remote failure is silent and defaults win. The hydrated record
    /// is persisted so local storage reflects the session from the start.
    pub async fn hydrate(
        store: Arc<dyn PreferenceStore>,
        client: &dyn ProfileClient,
        connectivity: &dyn ConnectivityProbe,
    ) -> Self {
        let record = match store.load().await {
            Some(record) => record,
            None => match store.load_remote_id().await {
                Some(id) if connectivity.is_online() => match client.read(&id).await {
                    Ok(remote) => {
                        debug!(%id, "seeded session from remote profile");
                        remote
                    }
                    Err(e) => {
                        debug!(%id, error = %e, "remote rehydration failed, using defaults");
                        PreferenceRecord::default()
                    }
                },
                _ => PreferenceRecord::default(),
            },
        };

        let session = Self::with_record(store, record.clone());
        session.persist(&record).await;
        session
    }

    /// Replace the full set of needs.
    pub async fn set_needs(&self, needs: Vec<Need>) {
        let record = {
            let mut state = self.state.lock().expect("session state lock poisoned");
            state.set_needs(needs);
            state.clone()
        };
        self.commit(record).await;
    }

    /// Flip one feature, leaving the others untouched.
    pub async fn toggle_feature(&self, feature: Feature) {
        let record = {
            let mut state = self.state.lock().expect("session state lock poisoned");
            state.features.toggle(feature);
            state.clone()
        };
        self.commit(record).await;
    }

    /// Set one feature explicitly.
    pub async fn set_feature(&self, feature: Feature, on: bool) {
        let record = {
            let mut state = self.state.lock().expect("session state lock poisoned");
            state.features.set(feature, on);
            state.clone()
        };
        self.commit(record).await;
    }

    /// Current state of the record.
    pub fn snapshot(&self) -> PreferenceRecord {
        self.state.lock().expect("session state lock poisoned").clone()
    }

    /// Subscribe to state changes. The receiver always holds the latest
    /// record; the coordinator and effectors each hold one of these.
    pub fn subscribe(&self) -> watch::Receiver<PreferenceRecord> {
        self.changes.subscribe()
    }

    /// Persist then publish. Persistence is ordered with the mutation;
    /// publication fans out to whoever is listening.
    async fn commit(&self, record: PreferenceRecord) {
        self.persist(&record).await;
        let _ = self.changes.send(record);
    }

    async fn persist(&self, record: &PreferenceRecord) {
        if let Err(e) = self.store.save(record).await {
            warn!(error = %e, "failed to persist preferences locally");
        }
    }
}
