//! Application wiring: shared state, server configuration, router assembly.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::infra::ReferenceCatalog;

pub const DEFAULT_PORT: u16 = 8080;

/// Immutable state shared across handlers. The catalog is built once at
/// startup; nothing behind the `Arc` is ever mutated.
pub struct AppState {
    pub catalog: ReferenceCatalog,
}

impl AppState {
    pub fn new(catalog: ReferenceCatalog) -> Self {
        Self { catalog }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl ServerConfig {
    /// Bind address from `FREIGHT_BIND` (e.g. `0.0.0.0:9000`), defaulting to
    /// loopback on the standard port. An unparseable value falls back to the
    /// default rather than aborting startup.
    pub fn from_env() -> Self {
        let bind = std::env::var("FREIGHT_BIND")
            .ok()
            .and_then(|value| match value.parse() {
                Ok(addr) => Some(addr),
                Err(_) => {
                    tracing::warn!("ignoring unparseable FREIGHT_BIND value: {value}");
                    None
                }
            })
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)));
        Self { bind }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/freight/calculate", post(api::freight::calculate))
        .route("/api/freight/containers", get(api::reference::containers))
        .route("/api/freight/ports", get(api::reference::ports))
        .route("/api/freight/cost-types", get(api::reference::cost_types))
        .route("/api/health", get(api::health::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
