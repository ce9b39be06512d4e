//! The employee record as it travels through the gateway.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::EmployeeId;

/// An employee record.
///
/// Only `id` and `name` are interpreted by the gateway. Every other
/// attribute the backend sends is kept in [`Employee::attributes`] and
/// written back out unchanged, so the wire shape stays owned by the
/// backend store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"id": 42, "name": "Ada"}))]
pub struct Employee {
    /// Backend-assigned identifier. Absent on create requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,

    /// Display name. Required when creating a record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Attributes opaque to the gateway.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl Employee {
    /// Creates a record with only a display name set.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            attributes: BTreeMap::new(),
        }
    }

    /// Returns this record carrying the given id.
    #[must_use]
    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the display name if it is present and not blank.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn unknown_attributes_survive_round_trip() {
        let raw = r#"{"id":3,"name":"Linus","department":"kernel","salary":1200}"#;
        let Ok(employee) = serde_json::from_str::<Employee>(raw) else {
            panic!("deserialization failed");
        };
        assert_eq!(employee.id, Some(EmployeeId::new(3)));
        assert_eq!(
            employee.attributes.get("department"),
            Some(&serde_json::json!("kernel"))
        );

        let Ok(value) = serde_json::to_value(&employee) else {
            panic!("serialization failed");
        };
        assert_eq!(
            value,
            serde_json::json!({"id": 3, "name": "Linus", "department": "kernel", "salary": 1200})
        );
    }

    #[test]
    fn missing_id_is_not_serialized() {
        let Ok(json) = serde_json::to_string(&Employee::named("Grace")) else {
            panic!("serialization failed");
        };
        assert_eq!(json, r#"{"name":"Grace"}"#);
    }

    #[test]
    fn blank_name_has_no_display_name() {
        assert_eq!(Employee::named("  ").display_name(), None);
        assert_eq!(Employee::default().display_name(), None);
        assert_eq!(Employee::named(" Ada ").display_name(), Some("Ada"));
    }
}
