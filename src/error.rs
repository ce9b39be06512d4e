//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Downstream
//! failures carry the operation and failure class, and their status comes
//! from [`crate::service::failure_policy`] rather than from the variant.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::client::BackendError;
use crate::domain::EmployeeId;
use crate::service::failure_policy::{self, FailureKind, Operation};
use crate::service::transcoder::TranscodeError;

/// Structured JSON error response body.
///
/// Error responses other than 404 follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 3001,
///     "message": "create failed (transport): connection refused"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`GatewayError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category         | HTTP Status                  |
/// |-----------|------------------|------------------------------|
/// | 1000–1999 | Validation       | 400 Bad Request              |
/// | 2000–2999 | Not Found        | 404 Not Found                |
/// | 3000–3999 | Server/Downstream| per operation failure policy |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The backend has no record with this id.
    #[error("employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    /// A downstream call failed.
    #[error("{operation} failed ({kind}): {cause}")]
    Downstream {
        /// Operation that issued the call.
        operation: Operation,
        /// Failure class.
        kind: FailureKind,
        /// Underlying cause, for logs and the error body.
        cause: String,
    },

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Builds a downstream error from a client failure.
    #[must_use]
    pub fn backend(operation: Operation, err: &BackendError) -> Self {
        let kind = match err {
            BackendError::Transport(_) => FailureKind::Transport,
            BackendError::Status { .. } => FailureKind::Rejected,
        };
        Self::Downstream {
            operation,
            kind,
            cause: err.to_string(),
        }
    }

    /// Builds a downstream error from a decoding failure.
    #[must_use]
    pub fn malformed(operation: Operation, err: &TranscodeError) -> Self {
        Self::Downstream {
            operation,
            kind: FailureKind::Malformed,
            cause: err.to_string(),
        }
    }

    /// Builds a downstream error for a successful answer without entity.
    #[must_use]
    pub fn missing_entity(operation: Operation) -> Self {
        Self::Downstream {
            operation,
            kind: FailureKind::MissingEntity,
            cause: "backend returned no entity".to_string(),
        }
    }

    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::EmployeeNotFound(_) => 2001,
            Self::Downstream { kind, .. } => match kind {
                FailureKind::Transport => 3001,
                FailureKind::Rejected => 3002,
                FailureKind::Malformed => 3003,
                FailureKind::MissingEntity => 3004,
            },
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::EmployeeNotFound(_) => StatusCode::NOT_FOUND,
            Self::Downstream {
                operation, kind, ..
            } => failure_policy::status_for(*operation, *kind),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Not-found and masked outcomes are answered with a bare status.
        if status == StatusCode::NOT_FOUND || status.is_success() {
            return status.into_response();
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
