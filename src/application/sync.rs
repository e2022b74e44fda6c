//! SyncCoordinator - debounced reconciliation of local state with the
//! remote profile.
//!
//! The coordinator watches the session's change channel. A change arms a
//! quiet-period timer (500 ms by default); further changes within the
//! window re-arm it, so a burst of toggles collapses into one outbound
//! request carrying the state as of the last toggle. The snapshot is read
//! at fire time, not at schedule time.
//!
//! Each attempt is a numbered cycle. A new change arriving while a cycle's
//! request is in flight supersedes the cycle: the request future is
//! dropped, its eventual result discarded, and the debounce window starts
//! over. Dropping the channel sender tears the task down, cancelling any
//! pending timer or request.
//!
//! No error here ever reaches the UI surface. Failed cycles are logged and
//! forgotten; the next state change triggers a fresh attempt.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::domain::{PreferenceRecord, RemoteProfileId};
use crate::ports::{ConnectivityProbe, PreferenceStore, ProfileClient};

/// Default quiet period between the last change and the outbound request.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Debounced synchronizer between the session and the profile API.
pub struct SyncCoordinator {
    client: Arc<dyn ProfileClient>,
    store: Arc<dyn PreferenceStore>,
    connectivity: Arc<dyn ConnectivityProbe>,
    debounce: Duration,
}

impl SyncCoordinator {
    pub fn new(
        client: Arc<dyn ProfileClient>,
        store: Arc<dyn PreferenceStore>,
        connectivity: Arc<dyn ConnectivityProbe>,
    ) -> Self {
        Self {
            client,
            store,
            connectivity,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Override the quiet period (tests, aggressive deployments).
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Spawn the reconcile loop on the runtime. The task exits when the
    /// session (the channel sender) is dropped.
    pub fn spawn(self, changes: watch::Receiver<PreferenceRecord>) -> JoinHandle<()> {
        tokio::spawn(self.run(changes))
    }

    async fn run(self, mut changes: watch::Receiver<PreferenceRecord>) {
        // The identifier persists across sessions; pick it up once.
        let mut remote_id = self.store.load_remote_id().await;
        let mut cycle: u64 = 0;
        // Set when a superseding change was already consumed by select!,
        // so the outer wait must be skipped.
        let mut pending = false;

        loop {
            if !pending && changes.changed().await.is_err() {
                return;
            }
            pending = false;

            // Quiet period: any further change re-arms the timer.
            loop {
                match timeout(self.debounce, changes.changed()).await {
                    Ok(Ok(())) => continue,
                    Ok(Err(_)) => return,
                    Err(_) => break,
                }
            }

            cycle += 1;
            let snapshot = changes.borrow_and_update().clone();

            tokio::select! {
                () = self.sync_cycle(cycle, &mut remote_id, &snapshot) => {}
                changed = changes.changed() => {
                    debug!(cycle, "sync cycle superseded by new change");
                    match changed {
                        Ok(()) => pending = true,
                        Err(_) => return,
                    }
                }
            }
        }
    }

    /// One reconcile attempt: update when an identifier is known, create
    /// otherwise, recreating within the same cycle when the identifier
    /// turns out to be stale.
    async fn sync_cycle(
        &self,
        cycle: u64,
        remote_id: &mut Option<RemoteProfileId>,
        record: &PreferenceRecord,
    ) {
        if !self.connectivity.is_online() {
            debug!(cycle, "network offline, skipping sync cycle");
            return;
        }

        if let Some(id) = remote_id.clone() {
            match self
                .client
                .update(&id, &record.needs, &record.features)
                .await
            {
                Ok(()) => {
                    debug!(cycle, %id, "remote profile updated");
                    return;
                }
                Err(e) if e.is_not_found() => {
                    info!(cycle, %id, "remote profile gone, recreating");
                    *remote_id = None;
                    if let Err(e) = self.store.clear_remote_id().await {
                        warn!(cycle, error = %e, "failed to clear stale remote id");
                    }
                }
                Err(e) => {
                    warn!(cycle, %id, error = %e, "remote update failed, waiting for next change");
                    return;
                }
            }
        }

        match self.client.create(&record.needs, &record.features).await {
            Ok(id) => {
                info!(cycle, %id, "remote profile created");
                if let Err(e) = self.store.save_remote_id(&id).await {
                    warn!(cycle, error = %e, "failed to persist remote id");
                }
                *remote_id = Some(id);
            }
            Err(e) => {
                warn!(cycle, error = %e, "remote create failed, waiting for next change");
            }
        }
    }
}
