//! OpenAPI document for the gateway surface.

use utoipa::OpenApi;

use super::handlers::{employee, system};
use crate::domain::{Employee, EmployeeId};
use crate::error::{ErrorBody, ErrorResponse};

/// OpenAPI description of every gateway route.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "employee-dashboard",
        description = "Dashboard gateway proxying employee CRUD requests to the backend employee service."
    ),
    paths(
        employee::list_employees,
        employee::get_employee,
        employee::create_employee,
        employee::update_employee,
        employee::delete_employee,
        system::health_handler,
    ),
    components(schemas(Employee, EmployeeId, ErrorResponse, ErrorBody)),
    tags(
        (name = "Employees", description = "Employee records, proxied to the backend store"),
        (name = "System", description = "Gateway health"),
    )
)]
pub struct ApiDoc;
