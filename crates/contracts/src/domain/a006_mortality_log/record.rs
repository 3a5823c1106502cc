use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{RecordId, StoreRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MortalityLogId(pub Uuid);

impl MortalityLogId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl RecordId for MortalityLogId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MortalityLogId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Bird mortality report for one shed (a006)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortalityLog {
    pub id: MortalityLogId,
    pub date: String,
    pub shed: String,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMortalityLogRequest {
    pub date: String,
    pub shed: String,
    pub count: i64,
    #[serde(default)]
    pub reason: String,
}

impl MortalityLog {
    pub fn new(req: CreateMortalityLogRequest) -> Self {
        Self {
            id: MortalityLogId::new(Uuid::new_v4()),
            date: req.date,
            shed: req.shed,
            count: req.count,
            reason: req.reason,
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.date.trim().is_empty() {
            return Err("Date is required".into());
        }
        if self.shed.trim().is_empty() {
            return Err("Shed is required".into());
        }
        Ok(())
    }
}

impl StoreRecord for MortalityLog {
    type Id = MortalityLogId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn collection_name() -> &'static str {
        "mortality"
    }

    fn element_name() -> &'static str {
        "Mortality report"
    }
}
