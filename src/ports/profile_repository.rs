//! ProfileRepository port - service-side storage behind the profile API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{FeatureSet, Need, RemoteProfileId};

/// Errors from service-side profile storage.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Profile not found: {0}")]
    NotFound(RemoteProfileId),

    #[error("Repository error: {0}")]
    Internal(String),
}

/// A profile as stored by the service, with object timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredProfile {
    pub id: RemoteProfileId,
    pub needs: Vec<Need>,
    pub features: FeatureSet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Repository for profile objects served by the HTTP API.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert a new profile, assigning its identifier.
    async fn insert(
        &self,
        needs: Vec<Need>,
        features: FeatureSet,
    ) -> Result<StoredProfile, RepositoryError>;

    /// Fetch a profile by identifier.
    async fn get(&self, id: &RemoteProfileId) -> Result<StoredProfile, RepositoryError>;

    /// List all stored profiles.
    async fn list(&self) -> Result<Vec<StoredProfile>, RepositoryError>;

    /// Overwrite an existing profile's needs and features.
    async fn update(
        &self,
        id: &RemoteProfileId,
        needs: Vec<Need>,
        features: FeatureSet,
    ) -> Result<StoredProfile, RepositoryError>;

    /// Remove a profile.
    async fn remove(&self, id: &RemoteProfileId) -> Result<(), RepositoryError>;
}
