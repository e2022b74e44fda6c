//! Connectivity probe adapters.

mod static_probe;

pub use static_probe::StaticConnectivity;
