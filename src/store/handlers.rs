//! HTTP handlers of the reference backend service.
//!
//! Answers the contract the gateway consumes: 200 with JSON bodies on
//! success, 404 with an empty body for unknown ids.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use super::EmployeeStore;
use crate::domain::{Employee, EmployeeId};
use crate::error::GatewayError;

/// Shared state of the backend service.
pub type StoreState = Arc<EmployeeStore>;

async fn list(State(store): State<StoreState>) -> Json<Vec<Employee>> {
    let employees = store.list().await;
    tracing::info!(count = employees.len(), "listing employees");
    Json(employees)
}

async fn get_one(
    State(store): State<StoreState>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<Employee>, GatewayError> {
    let employee = store.get(id).await?;
    tracing::info!(%id, "employee found");
    Ok(Json(employee))
}

async fn create(
    State(store): State<StoreState>,
    Json(employee): Json<Employee>,
) -> Json<Employee> {
    let stored = store.insert(employee).await;
    tracing::info!(id = ?stored.id, "employee stored");
    Json(stored)
}

async fn update(
    State(store): State<StoreState>,
    Path(id): Path<EmployeeId>,
    Json(employee): Json<Employee>,
) -> Result<Json<Employee>, GatewayError> {
    let stored = store.replace(id, employee).await.inspect_err(|_| {
        tracing::warn!(%id, "update of unknown employee");
    })?;
    tracing::info!(%id, "employee replaced");
    Ok(Json(stored))
}

async fn delete(
    State(store): State<StoreState>,
    Path(id): Path<EmployeeId>,
) -> Result<StatusCode, GatewayError> {
    store.remove(id).await.inspect_err(|_| {
        tracing::warn!(%id, "delete of unknown employee");
    })?;
    tracing::info!(%id, "employee deleted");
    Ok(StatusCode::OK)
}

/// Backend service routes.
pub fn routes() -> Router<StoreState> {
    Router::new()
        .route("/employees", get(list).post(create))
        .route("/employees/{id}", get(get_one).put(update).delete(delete))
}
