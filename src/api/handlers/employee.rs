//! Employee CRUD handlers: list, get, create, update, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::{Employee, EmployeeId};
use crate::error::{ErrorResponse, GatewayError};
use crate::service::ListOutcome;

/// `GET /employees`: List all employees.
///
/// # Errors
///
/// Returns [`GatewayError`] when the backend fails or sends a malformed
/// collection.
#[utoipa::path(
    get,
    path = "/employees",
    tag = "Employees",
    summary = "List employees",
    description = "Fetches every employee from the backend store. Some calls are deliberately delayed to emulate a degraded backend.",
    responses(
        (status = 200, description = "Employee collection", body = Vec<Employee>),
        (status = 204, description = "The backend holds no employees"),
        (status = 500, description = "Backend unreachable or payload malformed", body = ErrorResponse),
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> Result<Response, GatewayError> {
    let response = match state.dispatcher.list().await? {
        ListOutcome::Employees(employees) => (StatusCode::OK, Json(employees)).into_response(),
        ListOutcome::Empty => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}

/// `GET /employees/{id}`: Get one employee.
///
/// # Errors
///
/// Returns [`GatewayError`] (always answered as 404) when the record is
/// absent or the lookup fails.
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "Employees",
    summary = "Get an employee",
    description = "Fetches one employee from the backend store. Every failure is answered as 404.",
    params(
        ("id" = i64, Path, description = "Employee id"),
    ),
    responses(
        (status = 200, description = "Employee record", body = Employee),
        (status = 404, description = "No such employee, or the lookup failed"),
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<Employee>, GatewayError> {
    let employee = state.dispatcher.get(id).await?;
    Ok(Json(employee))
}

/// `POST /employees`: Create an employee.
///
/// # Errors
///
/// Returns [`GatewayError`] when the name is missing or the backend does
/// not return the stored record.
#[utoipa::path(
    post,
    path = "/employees",
    tag = "Employees",
    summary = "Create an employee",
    description = "Forwards the record to the backend store, which assigns its id.",
    request_body = Employee,
    responses(
        (status = 200, description = "Stored record with its assigned id", body = Employee),
        (status = 400, description = "Missing name", body = ErrorResponse),
        (status = 500, description = "Backend failed or returned no record", body = ErrorResponse),
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> Result<Json<Employee>, GatewayError> {
    let saved = state.dispatcher.create(employee).await?;
    Ok(Json(saved))
}

/// `PUT /employees/{id}`: Replace an employee.
///
/// # Errors
///
/// Returns [`GatewayError`] when the backend update fails.
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "Employees",
    summary = "Replace an employee",
    description = "Full replace. The path id overrides any id in the body.",
    params(
        ("id" = i64, Path, description = "Employee id"),
    ),
    request_body = Employee,
    responses(
        (status = 200, description = "The record as sent to the backend", body = Employee),
        (status = 500, description = "Backend update failed", body = ErrorResponse),
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    Json(employee): Json<Employee>,
) -> Result<Json<Employee>, GatewayError> {
    let sent = state.dispatcher.update(id, employee).await?;
    Ok(Json(sent))
}

/// `DELETE /employees/{id}`: Delete an employee.
///
/// # Errors
///
/// Returns [`GatewayError`] when the backend cannot be reached.
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "Employees",
    summary = "Delete an employee",
    description = "Forwards the delete to the backend store. Existence is not checked by the gateway.",
    params(
        ("id" = i64, Path, description = "Employee id"),
    ),
    responses(
        (status = 200, description = "Delete forwarded"),
        (status = 500, description = "Backend unreachable", body = ErrorResponse),
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<StatusCode, GatewayError> {
    state.dispatcher.delete(id).await?;
    Ok(StatusCode::OK)
}

/// Employee routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
}
