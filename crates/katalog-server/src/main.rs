#![forbid(unsafe_code)]

use katalog_server::{build_router, AppState, ServerConfig};
use katalog_store::{connect, StoreConfig};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = connect(&StoreConfig::from_env());
    let server = ServerConfig::from_env();
    let router = build_router(AppState::new(store));

    let listener = match TcpListener::bind(&server.bind).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {}: {e}", server.bind);
            return;
        }
    };
    info!("listening on {}", server.bind);
    if let Err(e) = axum::serve(listener, router).await {
        error!("server exited: {e}");
    }
}
