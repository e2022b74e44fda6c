//! Profile HTTP API - routes, handlers and DTOs.

mod dto;
mod handlers;
mod routes;

pub use dto::{DeletedResponse, ErrorResponse, ProfileBodyRequest, ProfileIdResponse, ProfileResponse};
pub use handlers::ProfileApiState;
pub use routes::profile_routes;
