//! In-memory profile repository.
//!
//! Backs the profile API in the default deployment and in tests. Profiles
//! live in a lock-protected map keyed by identifier; identifiers are
//! random UUIDs assigned on insert, and creation/update timestamps are
//! maintained per object.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

use crate::domain::{FeatureSet, Need, RemoteProfileId};
use crate::ports::{ProfileRepository, RepositoryError, StoredProfile};

/// In-memory implementation of [`ProfileRepository`].
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<RemoteProfileId, StoredProfile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles (for test assertions).
    pub fn len(&self) -> usize {
        self.profiles.read().expect("profiles lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn insert(
        &self,
        needs: Vec<Need>,
        features: FeatureSet,
    ) -> Result<StoredProfile, RepositoryError> {
        let now = Utc::now();
        let profile = StoredProfile {
            id: RemoteProfileId::new(Uuid::new_v4().simple().to_string()),
            needs,
            features,
            created_at: now,
            updated_at: now,
        };

        self.profiles
            .write()
            .expect("profiles lock poisoned")
            .insert(profile.id.clone(), profile.clone());

        Ok(profile)
    }

    async fn get(&self, id: &RemoteProfileId) -> Result<StoredProfile, RepositoryError> {
        self.profiles
            .read()
            .expect("profiles lock poisoned")
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))
    }

    async fn list(&self) -> Result<Vec<StoredProfile>, RepositoryError> {
        let mut profiles: Vec<StoredProfile> = self
            .profiles
            .read()
            .expect("profiles lock poisoned")
            .values()
            .cloned()
            .collect();
        profiles.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(profiles)
    }

    async fn update(
        &self,
        id: &RemoteProfileId,
        needs: Vec<Need>,
        features: FeatureSet,
    ) -> Result<StoredProfile, RepositoryError> {
        let mut profiles = self.profiles.write().expect("profiles lock poisoned");
        let profile = profiles
            .get_mut(id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;

        profile.needs = needs;
        profile.features = features;
        profile.updated_at = Utc::now();

        Ok(profile.clone())
    }

    async fn remove(&self, id: &RemoteProfileId) -> Result<(), RepositoryError> {
        self.profiles
            .write()
            .expect("profiles lock poisoned")
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Feature;

    #[tokio::test]
    async fn insert_assigns_unique_ids() {
        let repo = InMemoryProfileRepository::new();

        let a = repo.insert(vec![], FeatureSet::default()).await.unwrap();
        let b = repo.insert(vec![], FeatureSet::default()).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn get_returns_inserted_profile() {
        let repo = InMemoryProfileRepository::new();
        let mut features = FeatureSet::default();
        features.set(Feature::HighContrast, true);

        let inserted = repo.insert(vec![Need::Visual], features).await.unwrap();
        let fetched = repo.get(&inserted.id).await.unwrap();

        assert_eq!(fetched, inserted);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let repo = InMemoryProfileRepository::new();
        let result = repo.get(&RemoteProfileId::new("missing")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_overwrites_and_bumps_updated_at() {
        let repo = InMemoryProfileRepository::new();
        let inserted = repo.insert(vec![Need::Visual], FeatureSet::default()).await.unwrap();

        let mut features = FeatureSet::default();
        features.set(Feature::Captions, true);
        let updated = repo
            .update(&inserted.id, vec![Need::Motor], features)
            .await
            .unwrap();

        assert_eq!(updated.needs, vec![Need::Motor]);
        assert!(updated.features.enabled(Feature::Captions));
        assert_eq!(updated.created_at, inserted.created_at);
        assert!(updated.updated_at >= inserted.updated_at);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = InMemoryProfileRepository::new();
        let result = repo
            .update(&RemoteProfileId::new("missing"), vec![], FeatureSet::default())
            .await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn remove_then_get_is_not_found() {
        let repo = InMemoryProfileRepository::new();
        let inserted = repo.insert(vec![], FeatureSet::default()).await.unwrap();

        repo.remove(&inserted.id).await.unwrap();

        assert!(repo.is_empty());
        assert!(matches!(
            repo.get(&inserted.id).await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
