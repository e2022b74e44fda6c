//! HTTP handlers for profile endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::domain::RemoteProfileId;
use crate::ports::{ProfileRepository, RepositoryError};

use super::dto::{
    DeletedResponse, ErrorResponse, ProfileBodyRequest, ProfileIdResponse, ProfileResponse,
};

/// Shared handler state: the repository behind the API.
#[derive(Clone)]
pub struct ProfileApiState {
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileApiState {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }
}

/// POST /profiles - Create a profile
pub async fn create_profile(
    State(state): State<ProfileApiState>,
    Json(body): Json<ProfileBodyRequest>,
) -> Response {
    match state.repository.insert(body.needs, body.features).await {
        Ok(profile) => (
            StatusCode::CREATED,
            Json(ProfileIdResponse {
                id: profile.id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_repository_error(e),
    }
}

/// GET /profiles - List all profiles
pub async fn list_profiles(State(state): State<ProfileApiState>) -> Response {
    match state.repository.list().await {
        Ok(profiles) => {
            let body: Vec<ProfileResponse> = profiles.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_repository_error(e),
    }
}

/// GET /profiles/:id - Fetch one profile
pub async fn get_profile(
    State(state): State<ProfileApiState>,
    Path(id): Path<String>,
) -> Response {
    let id = RemoteProfileId::new(id);
    match state.repository.get(&id).await {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse::from(profile))).into_response(),
        Err(e) => handle_repository_error(e),
    }
}

/// PUT /profiles/:id - Overwrite one profile
pub async fn update_profile(
    State(state): State<ProfileApiState>,
    Path(id): Path<String>,
    Json(body): Json<ProfileBodyRequest>,
) -> Response {
    let id = RemoteProfileId::new(id);
    match state.repository.update(&id, body.needs, body.features).await {
        Ok(profile) => (
            StatusCode::OK,
            Json(ProfileIdResponse {
                id: profile.id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_repository_error(e),
    }
}

/// DELETE /profiles/:id - Remove one profile
pub async fn delete_profile(
    State(state): State<ProfileApiState>,
    Path(id): Path<String>,
) -> Response {
    let id = RemoteProfileId::new(id);
    match state.repository.remove(&id).await {
        Ok(()) => (StatusCode::OK, Json(DeletedResponse { ok: true })).into_response(),
        Err(e) => handle_repository_error(e),
    }
}

fn handle_repository_error(err: RepositoryError) -> Response {
    match err {
        RepositoryError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(id.as_str())),
        )
            .into_response(),
        RepositoryError::Internal(message) => {
            error!(%message, "profile repository failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(message)),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_not_found_maps_to_404() {
        let response = handle_repository_error(RepositoryError::NotFound(RemoteProfileId::new(
            "abc123",
        )));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn repository_internal_maps_to_500() {
        let response = handle_repository_error(RepositoryError::Internal("boom".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
