//! Employee dispatcher: one inbound operation, one downstream call.

use std::sync::Arc;

use super::failure_policy::{self, Operation};
use super::latency::{DelayOutcome, LatencyInjector};
use super::transcoder;
use crate::client::EmployeeBackend;
use crate::domain::{Employee, EmployeeId};
use crate::error::GatewayError;
use crate::lifecycle::ShutdownSignal;
use crate::observability::TraceRecorder;

/// APM parameter key carrying the requested employee id.
pub const LOOKUP_PARAMETER_KEY: &str = "userID";
/// APM transaction category for single-record lookups.
pub const LOOKUP_TRANSACTION_CATEGORY: &str = "employee-dashboard";
/// APM transaction name for single-record lookups.
pub const LOOKUP_TRANSACTION_NAME: &str = "employee-lookup";
/// Synthetic error notice attached to single-record lookups.
pub const LOOKUP_ERROR_NOTICE: &str = "custom error logged for employee lookup";

/// Result of a List call that reached the backend successfully.
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    /// The backend returned at least one record.
    Employees(Vec<Employee>),
    /// The backend returned an empty collection.
    Empty,
}

/// Gateway core.
///
/// Stateless coordinator: holds the backend port, the latency injector,
/// the APM recorder, and the shutdown signal. Every method follows the
/// pattern: log attempt → (List only) maybe delay → one backend call →
/// transcode → log outcome → return result.
#[derive(Debug, Clone)]
pub struct EmployeeDispatcher {
    backend: Arc<dyn EmployeeBackend>,
    latency: LatencyInjector,
    recorder: Arc<dyn TraceRecorder>,
    shutdown: ShutdownSignal,
}

impl EmployeeDispatcher {
    /// Creates a new `EmployeeDispatcher`.
    #[must_use]
    pub fn new(
        backend: Arc<dyn EmployeeBackend>,
        latency: LatencyInjector,
        recorder: Arc<dyn TraceRecorder>,
        shutdown: ShutdownSignal,
    ) -> Self {
        Self {
            backend,
            latency,
            recorder,
            shutdown,
        }
    }

    /// Lists every employee.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Downstream`] when the backend call fails or
    /// its payload cannot be decoded.
    #[tracing::instrument(name = "dispatch", skip_all, fields(operation = "list", request_id = %uuid::Uuid::new_v4()))]
    pub async fn list(&self) -> Result<ListOutcome, GatewayError> {
        tracing::info!("fetching all employees from backend");

        if self.latency.inject(&self.shutdown).await == DelayOutcome::Completed {
            tracing::debug!("artificial latency elapsed");
        }

        let body = self
            .backend
            .list()
            .await
            .map_err(|e| fail(GatewayError::backend(Operation::List, &e)))?;

        let employees = transcoder::decode_list(&body)
            .map_err(|e| fail(GatewayError::malformed(Operation::List, &e)))?;

        if employees.is_empty() {
            tracing::warn!(count = 0, "no employee records found");
            return Ok(ListOutcome::Empty);
        }

        tracing::info!(count = employees.len(), "received employee list");
        Ok(ListOutcome::Employees(employees))
    }

    /// Fetches one employee.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::EmployeeNotFound`] when the backend has no
    /// such record, and a [`GatewayError::Downstream`] (answered as 404 by
    /// the failure policy) for every other failure.
    #[tracing::instrument(name = "dispatch", skip_all, fields(operation = "get", request_id = %uuid::Uuid::new_v4()))]
    pub async fn get(&self, id: EmployeeId) -> Result<Employee, GatewayError> {
        tracing::info!(%id, "fetching employee from backend");

        let body = match self.backend.get(id).await {
            Ok(body) => body,
            Err(e) if e.is_not_found() => return Err(absent(id)),
            Err(e) => return Err(fail(GatewayError::backend(Operation::Get, &e))),
        };

        let employee = match transcoder::decode_one(&body) {
            Ok(Some(employee)) => employee,
            Ok(None) => return Err(absent(id)),
            Err(e) => return Err(fail(GatewayError::malformed(Operation::Get, &e))),
        };

        tracing::info!(
            %id,
            name = employee.name.as_deref().unwrap_or_default(),
            "employee received"
        );
        self.annotate_lookup(id);
        Ok(employee)
    }

    /// Forwards a new record to the backend and returns what it stored.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] when the record has no
    /// name, and [`GatewayError::Downstream`] when the backend fails or
    /// answers without an entity.
    #[tracing::instrument(name = "dispatch", skip_all, fields(operation = "create", request_id = %uuid::Uuid::new_v4()))]
    pub async fn create(&self, employee: Employee) -> Result<Employee, GatewayError> {
        let Some(name) = employee.display_name() else {
            tracing::warn!("save employee request without a name");
            return Err(GatewayError::InvalidRequest("name is required".to_string()));
        };
        tracing::info!(name, "save employee request received");

        let payload = transcoder::encode(&employee)
            .map_err(|e| fail(GatewayError::Internal(e.to_string())))?;

        let body = self
            .backend
            .create(payload)
            .await
            .map_err(|e| fail(GatewayError::backend(Operation::Create, &e)))?;

        match transcoder::decode_one(&body) {
            Ok(Some(saved)) => {
                match saved.id {
                    Some(id) => tracing::info!(%id, "employee saved"),
                    None => tracing::warn!("employee saved but backend echoed no id"),
                }
                Ok(saved)
            }
            Ok(None) => Err(fail(GatewayError::missing_entity(Operation::Create))),
            Err(e) => Err(fail(GatewayError::malformed(Operation::Create, &e))),
        }
    }

    /// Replaces the record at `id` and returns the record as sent.
    ///
    /// The path id always wins over any id in the body.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Downstream`] when the backend call fails.
    #[tracing::instrument(name = "dispatch", skip_all, fields(operation = "update", request_id = %uuid::Uuid::new_v4()))]
    pub async fn update(
        &self,
        id: EmployeeId,
        employee: Employee,
    ) -> Result<Employee, GatewayError> {
        if let Some(body_id) = employee.id
            && body_id != id
        {
            tracing::debug!(%id, %body_id, "body id replaced by path id");
        }
        tracing::info!(%id, "update employee request received");

        let employee = employee.with_id(id);
        let payload = transcoder::encode(&employee)
            .map_err(|e| fail(GatewayError::Internal(e.to_string())))?;

        self.backend
            .update(id, payload)
            .await
            .map_err(|e| fail(GatewayError::backend(Operation::Update, &e)))?;

        tracing::info!(%id, "employee updated");
        Ok(employee)
    }

    /// Asks the backend to delete `id`.
    ///
    /// Existence is the backend's concern: any answer it gives counts as
    /// done.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Downstream`] only when the backend cannot be
    /// reached.
    #[tracing::instrument(name = "dispatch", skip_all, fields(operation = "delete", request_id = %uuid::Uuid::new_v4()))]
    pub async fn delete(&self, id: EmployeeId) -> Result<(), GatewayError> {
        tracing::info!(%id, "delete employee request received");

        if let Err(e) = self.backend.delete(id).await {
            let err = GatewayError::backend(Operation::Delete, &e);
            if let GatewayError::Downstream { kind, .. } = &err
                && failure_policy::is_masked(Operation::Delete, *kind)
            {
                tracing::warn!(%id, cause = %e, "backend refused delete, acknowledging");
                return Ok(());
            }
            return Err(fail(err));
        }

        tracing::info!(%id, "employee deleted");
        Ok(())
    }

    fn annotate_lookup(&self, id: EmployeeId) {
        self.recorder
            .add_custom_parameter(LOOKUP_PARAMETER_KEY, &id.to_string());
        self.recorder.notice_error(LOOKUP_ERROR_NOTICE);
        self.recorder
            .set_transaction_name(LOOKUP_TRANSACTION_CATEGORY, LOOKUP_TRANSACTION_NAME);
    }
}

/// Logs a failure with its cause and passes it through.
fn fail(err: GatewayError) -> GatewayError {
    tracing::error!(
        status = err.status_code().as_u16(),
        code = err.error_code(),
        error = %err,
        "downstream call failed"
    );
    err
}

fn absent(id: EmployeeId) -> GatewayError {
    tracing::warn!(%id, "no employee found");
    GatewayError::EmployeeNotFound(id)
}
