//! # employee-dashboard
//!
//! Dashboard gateway for employee records. Clients talk to the gateway;
//! the gateway forwards every operation to a backend employee service over
//! HTTP and shapes the answer.
//!
//! On the way it slows down a share of List calls to emulate a degraded
//! backend, tags single-record lookups for APM, and maps each kind of
//! downstream failure to a status through an explicit per-operation
//! policy table. The gateway holds no employee state of its own.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── EmployeeDispatcher (service/)
//!     │     ├── LatencyInjector   (List only)
//!     │     ├── Transcoder        (wire bytes ⇄ Employee)
//!     │     ├── FailurePolicy     (failure → status)
//!     │     └── TraceRecorder     (observability/)
//!     │
//!     ├── EmployeeBackend (client/) ── reqwest
//!     │
//!     └── Backend employee service (store/, `employee-service` binary)
//! ```

pub mod api;
pub mod app_state;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod service;
pub mod store;
