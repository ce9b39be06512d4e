//! Domain layer: the employee record and its identifier.
//!
//! The gateway owns no employee state. These types only describe what
//! crosses the wire between clients, the gateway, and the backend store.

pub mod employee;
pub mod employee_id;

pub use employee::Employee;
pub use employee_id::EmployeeId;
