//! ConnectivityProbe port - network availability at debounce-fire time.

/// Reports whether the network is currently believed reachable.
///
/// The sync coordinator consults the probe when the debounce fires; if it
/// reports offline the cycle is skipped outright - no queue, no retry
/// timer. The next state change triggers a fresh attempt.
pub trait ConnectivityProbe: Send + Sync {
    fn is_online(&self) -> bool;
}
