//! Profile API server entrypoint.
//!
//! Serves the profile CRUD API that the accessibility session synchronizes
//! against. Configuration comes from `INCLUSIVE_AID__*` environment
//! variables (see [`inclusive_aid::config`]).

use std::sync::Arc;

use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use inclusive_aid::adapters::http::profile::{profile_routes, ProfileApiState};
use inclusive_aid::adapters::profile::InMemoryProfileRepository;
use inclusive_aid::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .json()
        .init();

    let repository = Arc::new(InMemoryProfileRepository::new());
    let state = ProfileApiState::new(repository);

    let origins = config.server.cors_origins_list();
    let cors = if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = origins
            .iter()
            .map(|o| o.parse::<axum::http::HeaderValue>())
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = profile_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "profile API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
