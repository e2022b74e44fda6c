//! HTTP DTOs for profile endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::{FeatureSet, Need};
use crate::ports::StoredProfile;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body for profile create and update.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileBodyRequest {
    #[serde(default)]
    pub needs: Vec<Need>,
    #[serde(default)]
    pub features: FeatureSet,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response carrying just the profile identifier (create and update).
#[derive(Debug, Clone, Serialize)]
pub struct ProfileIdResponse {
    pub id: String,
}

/// Full profile representation (read and list).
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub needs: Vec<Need>,
    pub features: FeatureSet,
}

impl From<StoredProfile> for ProfileResponse {
    fn from(profile: StoredProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            needs: profile.needs,
            features: profile.features,
        }
    }
}

/// Response for a successful delete.
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub ok: bool,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn not_found(id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("Profile not found: {}", id),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
