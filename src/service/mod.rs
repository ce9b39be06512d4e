//! Service layer: the gateway core.
//!
//! [`EmployeeDispatcher`] turns each inbound operation into one backend
//! call, with the [`transcoder`] handling wire bytes, the
//! [`LatencyInjector`] slowing down List, and [`failure_policy`] deciding
//! which status every downstream failure becomes.

pub mod dispatcher;
pub mod failure_policy;
pub mod latency;
pub mod transcoder;

pub use dispatcher::{EmployeeDispatcher, ListOutcome};
pub use failure_policy::{FailureKind, Operation};
pub use latency::{
    DelayOutcome, LatencyInjector, LatencyPolicy, RandomSource, SeededRandom, ThreadRandom,
};
pub use transcoder::TranscodeError;
