use tracing::{error, info};

use plantnet::app_system::{setup_tracing, Config, StorefrontSystem};
use plantnet::http::{self, AppState};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();

    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env().map_err(|e| e.to_string())?;
    let addr = config.resolve_addr().await.map_err(|e| e.to_string())?;
    info!(?config, "Starting plantNet storefront");

    // Start the catalog, order and user actors
    let system = StorefrontSystem::new(config.channel_buffer);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
        }
        info!("Shutdown signal received");
    };

    // The router's client clones are dropped when `serve` returns,
    // which lets the actors drain during shutdown.
    if let Err(e) = http::serve(AppState::from(&system), addr, shutdown).await {
        error!(error = %e, "HTTP server failed");
        system.shutdown().await?;
        return Err(e.to_string());
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
