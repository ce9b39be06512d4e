//! In-memory employee storage for the reference backend service.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::domain::{Employee, EmployeeId};
use crate::error::GatewayError;

#[derive(Debug)]
struct Records {
    by_id: BTreeMap<EmployeeId, Employee>,
    next_id: EmployeeId,
}

/// Employee records keyed by id, behind a single `RwLock`.
///
/// Ids start at 1, increase monotonically, and are never reused after a
/// delete.
#[derive(Debug)]
pub struct EmployeeStore {
    records: RwLock<Records>,
}

impl EmployeeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Records {
                by_id: BTreeMap::new(),
                next_id: EmployeeId::new(1),
            }),
        }
    }

    /// Returns every record in id order.
    pub async fn list(&self) -> Vec<Employee> {
        self.records.read().await.by_id.values().cloned().collect()
    }

    /// Returns the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::EmployeeNotFound`] if no such record exists.
    pub async fn get(&self, id: EmployeeId) -> Result<Employee, GatewayError> {
        self.records
            .read()
            .await
            .by_id
            .get(&id)
            .cloned()
            .ok_or(GatewayError::EmployeeNotFound(id))
    }

    /// Stores a new record under a freshly assigned id, ignoring any id
    /// it carries.
    pub async fn insert(&self, employee: Employee) -> Employee {
        let mut records = self.records.write().await;
        let id = records.next_id;
        records.next_id = id.next();

        let stored = employee.with_id(id);
        records.by_id.insert(id, stored.clone());
        stored
    }

    /// Replaces the record at `id` with `employee`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::EmployeeNotFound`] if no such record exists.
    pub async fn replace(
        &self,
        id: EmployeeId,
        employee: Employee,
    ) -> Result<Employee, GatewayError> {
        let mut records = self.records.write().await;
        let slot = records
            .by_id
            .get_mut(&id)
            .ok_or(GatewayError::EmployeeNotFound(id))?;
        *slot = employee.with_id(id);
        Ok(slot.clone())
    }

    /// Removes the record at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::EmployeeNotFound`] if no such record exists.
    pub async fn remove(&self, id: EmployeeId) -> Result<Employee, GatewayError> {
        self.records
            .write()
            .await
            .by_id
            .remove(&id)
            .ok_or(GatewayError::EmployeeNotFound(id))
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.by_id.len()
    }

    /// Returns `true` if the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.by_id.is_empty()
    }
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}
