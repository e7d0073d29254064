#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use studia_server::handler;
use studia_server::middleware::RouterExt;
use studia_server::service::ServiceState;

use crate::config::{Cli, ServerConfig, create_capabilities};

/// Tracing target for server startup events.
pub const TRACING_TARGET_STARTUP: &str = "studia_cli::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "studia_cli::server::shutdown";

/// Tracing target for configuration events.
pub const TRACING_TARGET_CONFIG: &str = "studia_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    cli.validate()?;
    cli.log();

    let capabilities = create_capabilities(&cli).context("failed to create capability registry")?;
    let service_config = cli.service.clone().into_config()?;
    let state = ServiceState::from_config(service_config, capabilities)
        .await
        .context("failed to create service state")?;

    let router = create_router(state, &cli.server);
    server::serve(router, cli.server).await?;

    Ok(())
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// 1. Recovery (outermost) - catches panics and enforces timeouts
/// 2. Observability - tracing spans
/// 3. Security - CORS
/// 4. Routes (innermost) - actual request handlers
fn create_router(state: ServiceState, server_config: &ServerConfig) -> Router {
    handler::router(state)
        .with_security_layer(&server_config.cors_allowed_origins)
        .with_observability_layer()
        .with_recovery_layer(server_config.request_timeout())
}
