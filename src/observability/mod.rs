//! Observability: log subscriber setup and the APM annotation hook.

pub mod logging;
pub mod recorder;

pub use logging::init_logging;
pub use recorder::{TraceRecorder, TracingRecorder};

#[cfg(test)]
pub(crate) use recorder::testing::{Annotation, MemoryRecorder};
