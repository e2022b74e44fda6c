//! Need categories a user can declare during onboarding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An accessibility need category.
///
/// Serialized with the wire identifiers the profile API stores
/// (`visual`, `auditiva`, ...), which are also what the onboarding UI
/// submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Need {
    Visual,
    #[serde(rename = "auditiva")]
    Auditory,
    #[serde(rename = "motora")]
    Motor,
    #[serde(rename = "cognitiva")]
    Cognitive,
    #[serde(rename = "sensorial")]
    Sensory,
}

impl Need {
    /// All need categories, in onboarding display order.
    pub const ALL: [Need; 5] = [
        Need::Visual,
        Need::Auditory,
        Need::Motor,
        Need::Cognitive,
        Need::Sensory,
    ];

    /// Wire identifier used by the profile API and local storage.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Need::Visual => "visual",
            Need::Auditory => "auditiva",
            Need::Motor => "motora",
            Need::Cognitive => "cognitiva",
            Need::Sensory => "sensorial",
        }
    }

    /// Parse a wire identifier back into a need category.
    pub fn from_wire_name(name: &str) -> Option<Need> {
        Need::ALL.into_iter().find(|n| n.wire_name() == name)
    }
}

impl fmt::Display for Need {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}
