use anyhow::{Context, Result};
use apigateway::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use registration::config::FormCatalog;
use shared::{
    config::Config,
    utils::{SystemClock, Telemetry, init_logger},
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = config
        .otel_endpoint
        .as_deref()
        .map(|endpoint| Telemetry::init("registration-gateway", endpoint))
        .transpose()
        .context("Failed to initialize telemetry")?;

    let _guard = init_logger(
        "apigateway",
        config.dev_mode,
        config.enable_file_log,
        telemetry.as_ref().map(Telemetry::logger_provider),
    );

    let catalog = match &config.form_catalog_path {
        Some(path) => FormCatalog::from_json_file(path).context("Failed to load form catalog")?,
        None => FormCatalog::default(),
    };

    info!("Loaded {} registration form(s)", catalog.forms.len());

    let state = AppState::new(catalog, Arc::new(SystemClock));

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    if let Some(telemetry) = telemetry {
        telemetry.shutdown()?;
    }

    Ok(())
}
