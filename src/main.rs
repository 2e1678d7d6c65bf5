use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use freight_cost_planner::app::{router, AppState, ServerConfig};
use freight_cost_planner::infra::ReferenceCatalog;
use freight_cost_planner::util::version::{version_label, APP_NAME};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let catalog = ReferenceCatalog::load_embedded()?;
    tracing::info!(
        containers = catalog.containers().len(),
        ports = catalog.ports().len(),
        "reference catalog loaded"
    );

    let state = Arc::new(AppState::new(catalog));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("{} {} listening on {}", APP_NAME, version_label(), config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}
