//! Per-operation mapping from downstream failure to response status.
//!
//! | Operation | Transport | Rejected | Malformed | MissingEntity |
//! |-----------|-----------|----------|-----------|---------------|
//! | List      | 500       | 500      | 500       | 500           |
//! | Get       | 404       | 404      | 404       | 404           |
//! | Create    | 500       | 500      | 500       | 500           |
//! | Update    | 500       | 500      | 500       | 500           |
//! | Delete    | 500       | 200      | 200       | 200           |
//!
//! Get never fails past the gateway: every failure reads as "not found".
//! Delete leaves existence to the backend, so any answer it gives is
//! acknowledged; only an unreachable backend is an error.

use std::fmt;

use axum::http::StatusCode;

/// Gateway operation, one per inbound route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `GET /employees`
    List,
    /// `GET /employees/{id}`
    Get,
    /// `POST /employees`
    Create,
    /// `PUT /employees/{id}`
    Update,
    /// `DELETE /employees/{id}`
    Delete,
}

impl Operation {
    /// Every operation, in route order.
    pub const ALL: [Self; 5] = [
        Self::List,
        Self::Get,
        Self::Create,
        Self::Update,
        Self::Delete,
    ];

    /// Stable lowercase name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Class of a downstream failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// No HTTP answer: refused, timed out, broken stream.
    Transport,
    /// The backend answered with a non-success status.
    Rejected,
    /// The backend's payload could not be decoded.
    Malformed,
    /// The backend answered successfully but returned no entity.
    MissingEntity,
}

impl FailureKind {
    /// Stable lowercase name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Rejected => "rejected",
            Self::Malformed => "malformed",
            Self::MissingEntity => "missing_entity",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status returned to the client for a failure of `kind` during `op`.
#[must_use]
pub const fn status_for(op: Operation, kind: FailureKind) -> StatusCode {
    match (op, kind) {
        (Operation::Get, _) => StatusCode::NOT_FOUND,
        (Operation::Delete, FailureKind::Transport) => StatusCode::INTERNAL_SERVER_ERROR,
        (Operation::Delete, _) => StatusCode::OK,
        (Operation::List | Operation::Create | Operation::Update, _) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Returns `true` when the policy masks this failure as success.
#[must_use]
pub fn is_masked(op: Operation, kind: FailureKind) -> bool {
    status_for(op, kind).is_success()
}
