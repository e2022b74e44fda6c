//! The preference record and the remote profile identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Feature, FeatureSet, Need};

/// One user's accessibility configuration.
///
/// Exactly one record is active per session. Needs behave as a set:
/// insertion order is irrelevant and duplicates carry no meaning, so
/// [`PreferenceRecord::set_needs`] deduplicates on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    #[serde(default)]
    pub needs: Vec<Need>,
    #[serde(default)]
    pub features: FeatureSet,
}

impl PreferenceRecord {
    /// Replace the full set of needs, dropping duplicates.
    pub fn set_needs(&mut self, needs: Vec<Need>) {
        let mut deduped = Vec::with_capacity(needs.len());
        for need in needs {
            if !deduped.contains(&need) {
                deduped.push(need);
            }
        }
        self.needs = deduped;
    }

    /// Whether the user declared a given need category.
    pub fn has_need(&self, need: Need) -> bool {
        self.needs.contains(&need)
    }

    /// Whether a feature is currently enabled.
    pub fn feature_enabled(&self, feature: Feature) -> bool {
        self.features.enabled(feature)
    }
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self {
            needs: Vec::new(),
            features: FeatureSet::default(),
        }
    }
}

/// Opaque identifier correlating local state to a remote-stored profile.
///
/// Obtained from the profile API on first create and reused for every
/// subsequent update until the remote side reports it gone. The sync
/// coordinator owns it once set; nothing else writes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteProfileId(String);

impl RemoteProfileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RemoteProfileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
