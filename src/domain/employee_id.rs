//! Type-safe employee identifier.
//!
//! [`EmployeeId`] is a newtype wrapper around the backend's 64-bit record
//! key, so an employee id cannot be confused with any other integer that
//! travels through the gateway.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier of an employee record.
///
/// Assigned by the backend store when a record is created. The gateway
/// never mints one; it only routes ids between clients and the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i64, example = 42)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wraps a raw backend key.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw backend key.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the id following this one, saturating at `i64::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EmployeeId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<EmployeeId> for i64 {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}
