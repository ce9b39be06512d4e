//! Reference backend employee service.
//!
//! Serves the employee store contract from memory so the gateway can be
//! run end to end without an external database.

use std::sync::Arc;

use anyhow::Context;

use employee_dashboard::config::StoreConfig;
use employee_dashboard::lifecycle::wait_for_signal;
use employee_dashboard::observability::init_logging;
use employee_dashboard::store::{self, EmployeeStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = StoreConfig::from_env().context("invalid employee-service configuration")?;
    init_logging(config.log_format);

    let app = store::build_app(Arc::new(EmployeeStore::new()));

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "employee-service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .await
        .context("server error")?;

    tracing::info!("employee-service stopped");
    Ok(())
}
