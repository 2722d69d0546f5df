use anyhow::{Context, Result};
use product::{
    config::myconfig::Config, handler::AppRouter, seed::load_store, state::AppState,
};
use shared::utils::{Telemetry, init_logger};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = match config.otel_endpoint.as_deref() {
        Some(endpoint) => Some(
            Telemetry::init("product-service", endpoint)
                .context("Failed to initialize telemetry")?,
        ),
        None => None,
    };

    init_logger(
        telemetry.as_ref().map(Telemetry::logger_provider),
        "product-service",
        config.is_dev,
        config.enable_file_log,
    )?;

    info!("🚀 Starting Product Service initialization...");
    info!(
        "⚙️ Filter mode: {:?}, pagination: {:?}",
        config.filter_mode, config.pagination_mode
    );

    let store = load_store(config.seed_file.as_deref())
        .await
        .context("Failed to load product store")?;

    let state = AppState::new(&config, store);

    info!("✅ Application setup completed successfully.");

    let result = AppRouter::serve(config.port, state).await;

    if let Some(telemetry) = telemetry {
        if let Err(e) = telemetry.shutdown() {
            error!("Failed to shutdown telemetry: {e}");
        }
    }

    info!("✅ Product Service shutdown complete.");
    result
}
