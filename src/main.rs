//! Global Radar - backend API for the product-scraping browser extension
//!
//! Layering:
//! - Domain: shipping, listing, matching (pure rules)
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory

use std::sync::Arc;

use gradar::config::{load_config, print_config};
use gradar::infrastructure::http::{ApiKeyAuth, AppState, HttpServer, ServerConfig};
use gradar::infrastructure::memory::InMemoryDraftRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (priority: environment > config file > defaults)
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // Initialize logging
    let log_filter = format!(
        "{},gradar={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Global Radar backend API");
    print_config(&config);

    // Resolve the API-key mode once; logs a warning when running open.
    let auth = ApiKeyAuth::from_config(&config.auth);

    // Draft store is a placeholder: in-memory and empty until publishing is real.
    let draft_repo = Arc::new(InMemoryDraftRepository::new());

    let state = AppState::new(auth, &config.publish, draft_repo);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    // Run with graceful shutdown
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
