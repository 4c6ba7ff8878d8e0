//! Resume portfolio server binary
//!
//! Run with: cargo run -p resume-folio --bin resume-folio-server

use resume_folio::{config::FolioConfig, server::FolioServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resume_folio=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = FolioConfig::load()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Cache backend: {:?}", config.cache.backend);
    tracing::info!(
        "  - Redis: {}:{}",
        config.cache.redis_host,
        config.cache.redis_port
    );
    tracing::info!("  - Cache TTL: {}s", config.cache.ttl_secs);
    tracing::info!("  - Resume paths: {}", config.resume.paths.join(", "));
    tracing::info!("  - Static dir: {}", config.resume.static_dir.display());

    // Create and start server
    let server = FolioServer::new(config).await;

    println!("\nServer starting...");
    println!("  Page: http://{}/", server.address());
    println!("  API:  http://{}/api/resume", server.address());
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
