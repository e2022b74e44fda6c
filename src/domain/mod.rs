//! Domain model - accessibility needs, features and the preference record.

pub mod preference;

pub use preference::{Feature, FeatureSet, Need, PreferenceRecord, RemoteProfileId};
