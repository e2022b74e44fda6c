//! Settable connectivity probe.
//!
//! The platform layer flips this when the environment reports the network
//! coming and going; tests flip it to simulate offline windows.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::ports::ConnectivityProbe;

/// A [`ConnectivityProbe`] backed by an atomic flag.
#[derive(Debug)]
pub struct StaticConnectivity {
    online: AtomicBool,
}

impl StaticConnectivity {
    /// A probe that starts online.
    pub fn online() -> Self {
        Self {
            online: AtomicBool::new(true),
        }
    }

    /// A probe that starts offline.
    pub fn offline() -> Self {
        Self {
            online: AtomicBool::new(false),
        }
    }

    /// Update the reported state.
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }
}

impl ConnectivityProbe for StaticConnectivity {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}
