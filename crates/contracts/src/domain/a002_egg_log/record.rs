use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{RecordId, StoreRecord};

/// ID type for an egg collection record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EggLogId(pub Uuid);

impl EggLogId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl RecordId for EggLogId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EggLogId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Egg collection entry, one per shed per day (a002)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EggLog {
    pub id: EggLogId,

    /// Collection date as entered (YYYY-MM-DD)
    pub date: String,

    pub shed: String,

    /// Eggs collected
    #[serde(default)]
    pub collected: i64,

    /// Eggs broken during collection
    #[serde(default)]
    pub broken: i64,

    pub created_at: DateTime<Utc>,
}

/// Form payload for a new egg record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEggLogRequest {
    pub date: String,
    pub shed: String,
    pub collected: i64,
    #[serde(default)]
    pub broken: i64,
}

impl EggLog {
    pub fn new(req: CreateEggLogRequest) -> Self {
        Self {
            id: EggLogId::new(Uuid::new_v4()),
            date: req.date,
            shed: req.shed,
            collected: req.collected,
            broken: req.broken,
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

impl StoreRecord for EggLog {
    type Id = EggLogId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn collection_name() -> &'static str {
        "eggs"
    }

    fn element_name() -> &'static str {
        "Egg record"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_defaults_to_zero() {
        let json = r#"{"date": "2024-06-01", "shed": "A", "collected": 50}"#;
        let req: CreateEggLogRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.broken, 0);

        let record = EggLog::new(req);
        assert_eq!(record.collected, 50);
        assert_eq!(record.broken, 0);
        assert!(record.validate().is_ok());
    }
}
