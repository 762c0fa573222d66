//! # restwelld — restwell daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize tracing
//! - Load the scoring model (artifact file or compiled-in coefficients)
//! - Construct the estimator service, injecting the model via the port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use restwell_adapter_http_axum::state::AppState;
use restwell_adapter_model_linear::LinearSleepModel;
use restwell_app::event_bus::InProcessEventBus;
use restwell_app::services::estimator_service::EstimatorService;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Scoring model
    let model = match &config.model.artifact {
        Some(path) => LinearSleepModel::load(path)
            .with_context(|| format!("loading model artifact {}", path.display()))?,
        None => LinearSleepModel::default(),
    };

    // Event bus
    let event_bus = Arc::new(InProcessEventBus::new(256));

    // Services
    let estimator = EstimatorService::new(model, Arc::clone(&event_bus));

    // HTTP
    let state = AppState::new(estimator, event_bus);
    let app = restwell_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!("restwelld listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
    }
}
