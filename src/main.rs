//! employee-dashboard gateway entry point.
//!
//! Starts the Axum HTTP server proxying employee requests to the backend
//! employee service.

use std::sync::Arc;

use anyhow::Context;

use employee_dashboard::api;
use employee_dashboard::app_state::AppState;
use employee_dashboard::client::{EmployeeBackend, HttpEmployeeBackend};
use employee_dashboard::config::GatewayConfig;
use employee_dashboard::lifecycle::{Shutdown, wait_for_signal};
use employee_dashboard::observability::{TraceRecorder, TracingRecorder, init_logging};
use employee_dashboard::service::{
    EmployeeDispatcher, LatencyInjector, RandomSource, SeededRandom, ThreadRandom,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = GatewayConfig::from_env().context("invalid gateway configuration")?;

    // Initialize tracing
    init_logging(config.log_format);
    tracing::info!(
        addr = %config.listen_addr,
        backend = %config.backend_url,
        "starting employee-dashboard"
    );

    // Build outbound client
    let backend = HttpEmployeeBackend::new(&config.backend_url, config.backend_timeout())
        .context("failed to build backend client")?;

    // Build latency injector
    let random: Arc<dyn RandomSource> = match config.latency_seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom),
    };
    let policy = config.latency_policy();
    tracing::info!(
        enabled = policy.enabled,
        delay_ms = config.latency_delay_ms,
        divisor = policy.divisor,
        seeded = config.latency_seed.is_some(),
        "latency injection configured"
    );
    let latency = LatencyInjector::new(policy, random);

    // Build service layer
    let shutdown = Shutdown::new();
    let dispatcher = EmployeeDispatcher::new(
        Arc::new(backend) as Arc<dyn EmployeeBackend>,
        latency,
        Arc::new(TracingRecorder) as Arc<dyn TraceRecorder>,
        shutdown.signal(),
    );

    // Build router
    let app = api::build_app(AppState::new(dispatcher), config.request_timeout());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_signal().await;
            shutdown.trigger();
        })
        .await
        .context("server error")?;

    tracing::info!("shutdown complete");
    Ok(())
}
