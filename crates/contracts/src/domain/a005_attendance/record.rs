use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{RecordId, StoreRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttendanceId(pub Uuid);

impl AttendanceId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl RecordId for AttendanceId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AttendanceId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Daily attendance mark for one employee (a005)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendance {
    pub id: AttendanceId,

    pub date: String,

    /// Employee name as listed in the roster (by value, not by id)
    pub employee: String,

    /// Open string; the UI offers the values of `AttendanceStatus`
    #[serde(default)]
    pub status: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAttendanceRequest {
    pub date: String,
    pub employee: String,
    pub status: String,
}

impl Attendance {
    pub fn new(req: CreateAttendanceRequest) -> Self {
        Self {
            id: AttendanceId::new(Uuid::new_v4()),
            date: req.date,
            employee: req.employee,
            status: req.status,
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.date.trim().is_empty() {
            return Err("Date is required".into());
        }
        if self.employee.trim().is_empty() {
            return Err("Employee is required".into());
        }
        Ok(())
    }
}

impl StoreRecord for Attendance {
    type Id = AttendanceId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn collection_name() -> &'static str {
        "attendance"
    }

    fn element_name() -> &'static str {
        "Attendance mark"
    }
}
