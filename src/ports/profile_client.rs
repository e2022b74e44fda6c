//! ProfileClient port - remote profile CRUD operations.
//!
//! The sync coordinator drives this port; the onboarding flow uses `read`
//! to rehydrate a fresh session when a remote identifier is already known.

use async_trait::async_trait;

use crate::domain::{FeatureSet, Need, PreferenceRecord, RemoteProfileId};

/// Errors from the remote profile API.
///
/// `NotFound` is distinguished from other failures so the coordinator can
/// discard a stale identifier and recreate the profile in the same cycle.
#[derive(Debug, thiserror::Error)]
pub enum ProfileClientError {
    #[error("Profile not found: {0}")]
    NotFound(RemoteProfileId),

    #[error("Profile API returned {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response body: {0}")]
    InvalidResponse(String),
}

impl ProfileClientError {
    /// Whether this error means the remote identifier is stale.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProfileClientError::NotFound(_))
    }
}

/// Client for the remote profile resource.
#[async_trait]
pub trait ProfileClient: Send + Sync {
    /// Create a remote profile, returning its identifier.
    async fn create(
        &self,
        needs: &[Need],
        features: &FeatureSet,
    ) -> Result<RemoteProfileId, ProfileClientError>;

    /// Fetch a profile by identifier.
    ///
    /// # Errors
    /// Returns `ProfileClientError::NotFound` when the identifier no
    /// longer resolves remotely.
    async fn read(&self, id: &RemoteProfileId) -> Result<PreferenceRecord, ProfileClientError>;

    /// Overwrite an existing profile.
    ///
    /// # Errors
    /// Returns `ProfileClientError::NotFound` when the identifier no
    /// longer resolves remotely, so the caller can recreate.
    async fn update(
        &self,
        id: &RemoteProfileId,
        needs: &[Need],
        features: &FeatureSet,
    ) -> Result<(), ProfileClientError>;

    /// Delete a profile. Administrative; not part of the sync flow.
    async fn delete(&self, id: &RemoteProfileId) -> Result<(), ProfileClientError>;
}
