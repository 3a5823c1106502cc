use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{RecordId, StoreRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeedLogId(pub Uuid);

impl FeedLogId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl RecordId for FeedLogId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(FeedLogId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Feed consumption entry, one per shed per day (a003)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedLog {
    pub id: FeedLogId,
    pub date: String,
    pub shed: String,
    #[serde(default)]
    pub kg: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFeedLogRequest {
    pub date: String,
    pub shed: String,
    pub kg: f64,
}

impl FeedLog {
    pub fn new(req: CreateFeedLogRequest) -> Self {
        Self {
            id: FeedLogId::new(Uuid::new_v4()),
            date: req.date,
            shed: req.shed,
            kg: req.kg,
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
        if !self.kg.is_finite() {
            return Err("Kg must be a number".into());
        }
        Ok(())
    }
}

impl StoreRecord for FeedLog {
    type Id = FeedLogId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn collection_name() -> &'static str {
        "feed_consumption"
    }

    fn element_name() -> &'static str {
        "Feed record"
    }
}
