#![forbid(unsafe_code)]
//! HTTP surface of the catalog.
//!
//! Routes mirror the source application's page routes: list pages at
//! `/hewan` and `/tanaman`, detail pages underneath them, a landing
//! summary at `/` and a liveness probe. Handlers wire the boundary
//! pieces together: parse params, compose criteria, fetch through a
//! list feed, run the presentation engine, respond with DTOs.

use axum::routing::get;
use axum::Router;
use katalog_store::RecordStore;
use std::sync::Arc;

mod config;
mod handlers;

pub use config::{ServerConfig, ENV_BIND};

pub const CRATE_NAME: &str = "katalog-server";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::summary_handler))
        .route("/healthz", get(handlers::healthz_handler))
        .route("/hewan", get(handlers::animal_list_handler))
        .route("/hewan/detail/:id", get(handlers::animal_detail_handler))
        .route("/tanaman", get(handlers::plant_list_handler))
        .route("/tanaman/detail/:id", get(handlers::plant_detail_handler))
        .with_state(state)
}
