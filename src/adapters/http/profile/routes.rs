//! HTTP routes for profile endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    create_profile, delete_profile, get_profile, list_profiles, update_profile, ProfileApiState,
};

/// Creates the profile router with all endpoints.
pub fn profile_routes(state: ProfileApiState) -> Router {
    Router::new()
        .route("/profiles", post(create_profile))
        .route("/profiles", get(list_profiles))
        .route("/profiles/:id", get(get_profile))
        .route("/profiles/:id", put(update_profile))
        .route("/profiles/:id", delete(delete_profile))
        .with_state(state)
}
