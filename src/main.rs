// gemini-relay - prompt/image relay to the Gemini generateContent API
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use gemini_relay::cli::Args;
use gemini_relay::config::AppConfig;
use gemini_relay::gemini::GeminiClient;
use gemini_relay::server::create_router;
use gemini_relay::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments (after .env, so it can supply GEMINI_RELAY_CONFIG)
    let args = Args::load();

    // Phase 1: Load configuration
    let mut config = AppConfig::load(args.config.as_deref())?;
    args.apply(&mut config);

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting gemini-relay v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Fail fast on unusable configuration
    config.validate()?;

    // Phase 4: Build the upstream client
    let gemini_client = GeminiClient::new(&config.gemini, config.logging.sanitize_tokens)?;
    info!("Relaying to {}", gemini_client.endpoint());

    // Phase 5: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(config, gemini_client)?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 6: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
