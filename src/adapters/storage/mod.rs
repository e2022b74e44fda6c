//! Local preference storage adapters.

mod file_preference_store;
mod in_memory_preference_store;

pub use file_preference_store::FilePreferenceStore;
pub use in_memory_preference_store::InMemoryPreferenceStore;
