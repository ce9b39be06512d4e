//! Outbound side of the gateway: the backend store port and its HTTP
//! implementation.
//!
//! The dispatcher only sees [`EmployeeBackend`]. Payloads cross this
//! boundary as raw bytes so that decoding stays in the transcoder.

pub mod error;
pub mod http;

#[cfg(test)]
pub(crate) mod stub;

use std::fmt;

use async_trait::async_trait;

pub use error::BackendError;
pub use http::HttpEmployeeBackend;

use crate::domain::EmployeeId;

/// Port to the backend employee store.
///
/// Each method performs exactly one downstream request. A 2xx answer
/// yields the raw response body; anything else is a [`BackendError`].
#[async_trait]
pub trait EmployeeBackend: Send + Sync + fmt::Debug {
    /// `GET /employees`.
    async fn list(&self) -> Result<Vec<u8>, BackendError>;

    /// `GET /employees/{id}`.
    async fn get(&self, id: EmployeeId) -> Result<Vec<u8>, BackendError>;

    /// `POST /employees` with an encoded record.
    async fn create(&self, payload: Vec<u8>) -> Result<Vec<u8>, BackendError>;

    /// `PUT /employees/{id}` with an encoded record (full replace).
    async fn update(&self, id: EmployeeId, payload: Vec<u8>) -> Result<(), BackendError>;

    /// `DELETE /employees/{id}`.
    async fn delete(&self, id: EmployeeId) -> Result<(), BackendError>;
}
