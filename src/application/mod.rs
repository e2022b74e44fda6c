//! Application layer - session state, synchronization, and effects.
//!
//! This layer owns the accessibility state and the behavior around it:
//! the [`session::AccessibilitySession`] container, the debounced
//! [`sync::SyncCoordinator`] that mirrors state to the profile API, and
//! the [`effects::EffectRunner`] that drives reactive side effects.

pub mod effects;
pub mod session;
pub mod sync;

pub use effects::{AccessibilityEffect, EffectRunner, TraceEffect};
pub use session::AccessibilitySession;
pub use sync::SyncCoordinator;
