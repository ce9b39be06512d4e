//! Reference backend employee service.
//!
//! A minimal in-memory implementation of the backend store contract the
//! gateway consumes. It runs as the `employee-service` binary and backs
//! the end-to-end tests.

pub mod handlers;
pub mod memory;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use handlers::StoreState;
pub use memory::EmployeeStore;

/// Builds the servable backend application around `store`.
pub fn build_app(store: Arc<EmployeeStore>) -> Router {
    handlers::routes()
        .merge(crate::api::handlers::system::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
