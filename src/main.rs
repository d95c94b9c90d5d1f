//! Vision+ Medical Imaging System server
//!
//! Serves the banner, health, version and status endpoints and, when
//! enabled, read-only access to the resource directory.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vision_plus_server::config::Config;
use vision_plus_server::create_router;
use vision_plus_server::error::StartupError;
use vision_plus_server::services::ResourceDirectory;
use vision_plus_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    // Build application state; the resource directory must exist before serving
    let mut state = AppState::new(config.environment);
    if config.resources.enabled {
        let resources = ResourceDirectory::ensure(&config.resources.dir).await?;
        info!("Serving resources from {}", resources.root().display());
        state = state.with_resources(resources);
    }
    if let Some(port) = config.https.redirect_port {
        info!("Redirecting plain HTTP requests to HTTPS port {}", port);
        state = state.with_https_redirect(port);
    }
    if config.environment.is_development() {
        info!("API documentation enabled at /swagger-ui");
    }

    let app = create_router(Arc::new(state));

    // Bind to address from config
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| StartupError::InvalidAddress(format!("{}: {}", config.server_addr(), e)))?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    info!("🚀 Server running on http://{}", addr);
    info!("Environment: {}", config.environment);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
