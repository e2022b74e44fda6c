//! Feature effectors - side effects driven by preference changes.
//!
//! Effects observe the session's change channel and react to transitions.
//! They receive both the previous and the current record so they can act
//! on edges (narration switching on, contrast switching off) rather than
//! re-applying the whole state on every change.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::domain::{Feature, PreferenceRecord};

/// A reactive consumer of preference transitions.
///
/// Implementations must be cheap and non-blocking; anything slow belongs
/// on its own task.
pub trait AccessibilityEffect: Send + Sync {
    /// Stable name, used in logs.
    fn name(&self) -> &'static str;

    /// Called once per observed transition with the record before and
    /// after the change.
    fn apply(&self, previous: &PreferenceRecord, current: &PreferenceRecord);
}

/// Drives a set of effects from the session's change channel.
pub struct EffectRunner {
    effects: Vec<Arc<dyn AccessibilityEffect>>,
}

impl EffectRunner {
    pub fn new(effects: Vec<Arc<dyn AccessibilityEffect>>) -> Self {
        Self { effects }
    }

    /// Spawn the dispatch loop. The task exits when the session is
    /// dropped. Effects see every published change in order.
    pub fn spawn(self, mut changes: watch::Receiver<PreferenceRecord>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut previous = changes.borrow().clone();
            while changes.changed().await.is_ok() {
                let current = changes.borrow_and_update().clone();
                for effect in &self.effects {
                    effect.apply(&previous, &current);
                }
                previous = current;
            }
        })
    }
}

/// Logs feature edges. Stands in for platform effectors (screen reader,
/// theme switcher) in headless deployments.
pub struct TraceEffect;

impl AccessibilityEffect for TraceEffect {
    fn name(&self) -> &'static str {
        "trace"
    }

    fn apply(&self, previous: &PreferenceRecord, current: &PreferenceRecord) {
        for feature in Feature::ALL {
            let was = previous.feature_enabled(feature);
            let is = current.feature_enabled(feature);
            if was != is {
                info!(feature = %feature.label(), enabled = is, "feature changed");
            }
        }
        if previous.needs != current.needs {
            info!(needs = ?current.needs, "declared needs changed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryPreferenceStore;
    use crate::application::session::AccessibilitySession;
    use crate::domain::Feature;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Edge {
        feature: Feature,
        enabled: bool,
    }

    struct RecordingEffect {
        edges: Mutex<Vec<Edge>>,
    }

    impl RecordingEffect {
        fn new() -> Self {
            Self {
                edges: Mutex::new(Vec::new()),
            }
        }

        fn edges(&self) -> Vec<Edge> {
            self.edges.lock().unwrap().clone()
        }
    }

    impl AccessibilityEffect for RecordingEffect {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn apply(&self, previous: &PreferenceRecord, current: &PreferenceRecord) {
            let mut edges = self.edges.lock().unwrap();
            for feature in Feature::ALL {
                let was = previous.feature_enabled(feature);
                let is = current.feature_enabled(feature);
                if was != is {
                    edges.push(Edge {
                        feature,
                        enabled: is,
                    });
                }
            }
        }
    }

    #[tokio::test]
    async fn effect_sees_feature_edges_in_order() {
        let session = AccessibilitySession::new(Arc::new(InMemoryPreferenceStore::new()));
        let effect = Arc::new(RecordingEffect::new());
        let task = EffectRunner::new(vec![effect.clone()]).spawn(session.subscribe());

        // The channel coalesces; yield after each change so the runner
        // observes every intermediate record.
        session.set_feature(Feature::HighContrast, true).await;
        tokio::task::yield_now().await;
        session.toggle_feature(Feature::Narration).await;
        tokio::task::yield_now().await;
        session.set_feature(Feature::HighContrast, false).await;

        drop(session);
        task.await.unwrap();

        assert_eq!(
            effect.edges(),
            vec![
                Edge {
                    feature: Feature::HighContrast,
                    enabled: true
                },
                Edge {
                    feature: Feature::Narration,
                    enabled: false
                },
                Edge {
                    feature: Feature::HighContrast,
                    enabled: false
                },
            ]
        );
    }

    #[tokio::test]
    async fn setting_a_feature_to_its_current_value_produces_no_edge() {
        let session = AccessibilitySession::new(Arc::new(InMemoryPreferenceStore::new()));
        let effect = Arc::new(RecordingEffect::new());
        let task = EffectRunner::new(vec![effect.clone()]).spawn(session.subscribe());

        // Narration starts enabled by default.
        session.set_feature(Feature::Narration, true).await;
        tokio::task::yield_now().await;
        session.set_feature(Feature::Captions, true).await;

        drop(session);
        task.await.unwrap();

        assert_eq!(
            effect.edges(),
            vec![Edge {
                feature: Feature::Captions,
                enabled: true
            }]
        );
    }
}
