//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application core and the outside world. Adapters implement them.
//!
//! - `ProfileClient` - remote profile CRUD consumed by the sync coordinator
//! - `PreferenceStore` - durable local copy of the preference record
//! - `ProfileRepository` - service-side profile storage behind the HTTP API
//! - `ConnectivityProbe` - network availability check at debounce-fire time

mod connectivity;
mod preference_store;
mod profile_client;
mod profile_repository;

pub use connectivity::ConnectivityProbe;
pub use preference_store::{PreferenceStore, PreferenceStoreError};
pub use profile_client::{ProfileClient, ProfileClientError};
pub use profile_repository::{ProfileRepository, RepositoryError, StoredProfile};
