//! HTTP Profile Client - Implementation of ProfileClient over the REST profile API.
//!
//! Talks to the `profiles` resource:
//!
//! - `POST   {base}/profiles`      create, returns `{id}`
//! - `GET    {base}/profiles/{id}` read, 404 when the identifier is stale
//! - `PUT    {base}/profiles/{id}` update, 404 when the identifier is stale
//! - `DELETE {base}/profiles/{id}` delete, returns `{ok: true}`
//!
//! # Configuration
//!
//! ```ignore
//! let config = ProfileClientConfig::new("http://localhost:8080/api")
//!     .with_api_key(api_key)
//!     .with_timeout(Duration::from_secs(10));
//!
//! let client = HttpProfileClient::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::{FeatureSet, Need, PreferenceRecord, RemoteProfileId};
use crate::ports::{ProfileClient, ProfileClientError};

/// Configuration for the HTTP profile client.
#[derive(Debug, Clone)]
pub struct ProfileClientConfig {
    /// Base URL of the profile API (without the `/profiles` suffix).
    pub base_url: String,
    /// Optional API key sent as `x-api-key`.
    api_key: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl ProfileClientConfig {
    /// Creates a new configuration pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret().as_str())
    }
}

impl From<&crate::config::ProfileApiConfig> for ProfileClientConfig {
    fn from(settings: &crate::config::ProfileApiConfig) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }
}

#[derive(Debug, Serialize)]
struct ProfileBody<'a> {
    needs: &'a [Need],
    features: &'a FeatureSet,
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    #[allow(dead_code)]
    id: String,
    #[serde(default)]
    needs: Vec<Need>,
    #[serde(default)]
    features: FeatureSet,
}

/// reqwest-backed implementation of [`ProfileClient`].
pub struct HttpProfileClient {
    config: ProfileClientConfig,
    client: Client,
}

impl HttpProfileClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: ProfileClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn profiles_url(&self) -> String {
        format!("{}/profiles", self.config.base_url.trim_end_matches('/'))
    }

    fn profile_url(&self, id: &RemoteProfileId) -> String {
        format!("{}/{}", self.profiles_url(), id)
    }

    fn apply_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.config.api_key() {
            Some(key) => request.header("x-api-key", key),
            None => request,
        }
    }

    fn network_error(e: reqwest::Error) -> ProfileClientError {
        if e.is_timeout() {
            ProfileClientError::Network("request timed out".to_string())
        } else if e.is_connect() {
            ProfileClientError::Network(format!("connection failed: {}", e))
        } else {
            ProfileClientError::Network(e.to_string())
        }
    }

    /// Maps a non-success status to the error taxonomy. `id` is the
    /// identifier a 404 should report as stale, when one applies.
    async fn check_status(
        response: Response,
        id: Option<&RemoteProfileId>,
    ) -> Result<Response, ProfileClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(ProfileClientError::NotFound(id.clone()));
            }
        }

        let message = response.text().await.unwrap_or_default();
        Err(ProfileClientError::Remote {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ProfileClient for HttpProfileClient {
    async fn create(
        &self,
        needs: &[Need],
        features: &FeatureSet,
    ) -> Result<RemoteProfileId, ProfileClientError> {
        let response = self
            .apply_headers(self.client.post(self.profiles_url()))
            .json(&ProfileBody { needs, features })
            .send()
            .await
            .map_err(Self::network_error)?;

        let response = Self::check_status(response, None).await?;
        let created: CreatedResponse = response
            .json()
            .await
            .map_err(|e| ProfileClientError::InvalidResponse(e.to_string()))?;

        Ok(RemoteProfileId::new(created.id))
    }

    async fn read(&self, id: &RemoteProfileId) -> Result<PreferenceRecord, ProfileClientError> {
        let response = self
            .apply_headers(self.client.get(self.profile_url(id)))
            .send()
            .await
            .map_err(Self::network_error)?;

        let response = Self::check_status(response, Some(id)).await?;
        let profile: ProfileResponse = response
            .json()
            .await
            .map_err(|e| ProfileClientError::InvalidResponse(e.to_string()))?;

        Ok(PreferenceRecord {
            needs: profile.needs,
            features: profile.features,
        })
    }

    async fn update(
        &self,
        id: &RemoteProfileId,
        needs: &[Need],
        features: &FeatureSet,
    ) -> Result<(), ProfileClientError> {
        let response = self
            .apply_headers(self.client.put(self.profile_url(id)))
            .json(&ProfileBody { needs, features })
            .send()
            .await
            .map_err(Self::network_error)?;

        Self::check_status(response, Some(id)).await?;
        Ok(())
    }

    async fn delete(&self, id: &RemoteProfileId) -> Result<(), ProfileClientError> {
        let response = self
            .apply_headers(self.client.delete(self.profile_url(id)))
            .send()
            .await
            .map_err(Self::network_error)?;

        Self::check_status(response, Some(id)).await?;
        Ok(())
    }
}
