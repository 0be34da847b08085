//! REST API
//!
//! Routes:
//! - `GET /api/health`
//! - `GET /api/brreg?action=enhet|roller|search` registry pass-through
//! - `GET /api/brreg/styre` current board members
//! - `GET /api/map` cluster layout (`q`, `hovered`, `selected`, `view`)
//! - `GET /api/kingmakers` kingmaker ring (`hovered`, `selected`)
//! - `GET /api/entities/:id`
//! - `GET /api/revolving-door`
//!
//! Anything else falls through to the static directory when one is configured.

pub mod brreg_routes;
pub mod error;
pub mod map_routes;

pub use error::{ApiError, ErrorBody};

use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::brreg::RegistryLookup;
use crate::dataset::PowerDataset;

/// Shared, read-only request state
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<PowerDataset>,
    pub registry: Arc<dyn RegistryLookup>,
}

impl AppState {
    pub fn new(dataset: PowerDataset, registry: Arc<dyn RegistryLookup>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            registry,
        }
    }
}

pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/api/health", get(map_routes::health))
        .route("/api/brreg", get(brreg_routes::brreg_lookup))
        .route("/api/brreg/styre", get(brreg_routes::board_members))
        .route("/api/map", get(map_routes::map_layout))
        .route("/api/kingmakers", get(map_routes::kingmaker_ring))
        .route("/api/entities/:id", get(map_routes::get_entity))
        .route("/api/revolving-door", get(map_routes::revolving_door))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };

    router.layer(
        ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        ),
    )
}
