//! APM side channel for the Get path.
//!
//! The dispatcher tags single-record lookups with a custom parameter, an
//! error notice, and a transaction name. These calls are fire-and-forget:
//! they return nothing and cannot influence the response.

use std::fmt;

/// Sink for APM-style annotations.
pub trait TraceRecorder: Send + Sync + fmt::Debug {
    /// Attaches a custom key/value parameter to the current transaction.
    fn add_custom_parameter(&self, key: &str, value: &str);

    /// Records an error notice without failing the transaction.
    fn notice_error(&self, message: &str);

    /// Names the current transaction.
    fn set_transaction_name(&self, category: &str, name: &str);
}

/// Default recorder: writes annotations as `tracing` events on the `apm`
/// target, so they land in the regular log stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRecorder;

impl TraceRecorder for TracingRecorder {
    fn add_custom_parameter(&self, key: &str, value: &str) {
        tracing::info!(target: "apm", key, value, "custom parameter");
    }

    fn notice_error(&self, message: &str) {
        tracing::warn!(target: "apm", message, "error noticed");
    }

    fn set_transaction_name(&self, category: &str, name: &str) {
        tracing::info!(target: "apm", category, name, "transaction named");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::TraceRecorder;

    /// One call made on a [`MemoryRecorder`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Annotation {
        CustomParameter { key: String, value: String },
        Error(String),
        TransactionName { category: String, name: String },
    }

    /// Recorder that keeps every annotation for later assertions.
    #[derive(Debug, Default)]
    pub(crate) struct MemoryRecorder {
        annotations: Mutex<Vec<Annotation>>,
    }

    impl MemoryRecorder {
        pub(crate) fn annotations(&self) -> Vec<Annotation> {
            self.annotations
                .lock()
                .map(|a| a.clone())
                .unwrap_or_default()
        }

        fn push(&self, annotation: Annotation) {
            if let Ok(mut annotations) = self.annotations.lock() {
                annotations.push(annotation);
            }
        }
    }

    impl TraceRecorder for MemoryRecorder {
        fn add_custom_parameter(&self, key: &str, value: &str) {
            self.push(Annotation::CustomParameter {
                key: key.to_string(),
                value: value.to_string(),
            });
        }

        fn notice_error(&self, message: &str) {
            self.push(Annotation::Error(message.to_string()));
        }

        fn set_transaction_name(&self, category: &str, name: &str) {
            self.push(Annotation::TransactionName {
                category: category.to_string(),
                name: name.to_string(),
            });
        }
    }
}
