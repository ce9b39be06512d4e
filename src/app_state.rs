//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::EmployeeDispatcher;

/// Shared application state available to all gateway handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Dispatcher for every employee operation.
    pub dispatcher: Arc<EmployeeDispatcher>,
}

impl AppState {
    /// Wraps a dispatcher.
    #[must_use]
    pub fn new(dispatcher: EmployeeDispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }
}
