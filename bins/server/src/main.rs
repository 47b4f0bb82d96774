//! Currency report server
//!
//! Main entry point for the currency report service.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxreport_api::{AppState, create_router};
use fxreport_core::model::ModelInvoker;
use fxreport_core::reports::{PROMPT_TEMPLATE_VERSION, ReportGenerator};
use fxreport_llm::GeminiClient;
use fxreport_shared::AppConfig;
use fxreport_shared::config::API_KEY_ENV;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fxreport=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Build the report pipeline
    let generator = if config.model.is_configured() {
        let client = GeminiClient::from_config(&config.model)?;
        let invoker = ModelInvoker::new(
            Arc::new(client),
            config.model.models.clone(),
            Duration::from_secs(config.model.timeout_secs),
        );
        info!(
            models = ?invoker.models(),
            timeout_secs = config.model.timeout_secs,
            prompt_version = PROMPT_TEMPLATE_VERSION,
            "Model chain configured"
        );
        ReportGenerator::new(invoker)
    } else {
        warn!(
            "{API_KEY_ENV} is not set; report generation will fail until a key is configured"
        );
        ReportGenerator::unconfigured()
    };

    // Create router
    let app = create_router(AppState::new(generator));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
