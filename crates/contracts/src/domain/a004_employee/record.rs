use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{RecordId, StoreRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl RecordId for EmployeeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EmployeeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Roster entry for one member of staff (a004)
///
/// Attendance records reference employees by name (by value, not by id),
/// matching the store's denormalized layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: String,
}

impl Employee {
    pub fn new(req: CreateEmployeeRequest) -> Self {
        Self {
            id: EmployeeId::new(Uuid::new_v4()),
            name: req.name,
            phone: req.phone,
            role: req.role,
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        // Name doubles as the attendance foreign key
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        Ok(())
    }
}

impl StoreRecord for Employee {
    type Id = EmployeeId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn collection_name() -> &'static str {
        "employees"
    }

    fn element_name() -> &'static str {
        "Employee"
    }
}
