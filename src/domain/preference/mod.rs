//! Preference domain types.
//!
//! A user's accessibility configuration is a single [`PreferenceRecord`]:
//! the selected need categories plus the on/off state of every assistive
//! feature. Needs and features are closed enumerations so consumers can
//! match exhaustively instead of probing a string-keyed map.

mod feature;
mod need;
mod record;

pub use feature::{Feature, FeatureSet};
pub use need::Need;
pub use record::{PreferenceRecord, RemoteProfileId};
