use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{RecordId, StoreRecord};

/// ID type for an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpenseId(pub Uuid);

impl ExpenseId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl RecordId for ExpenseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ExpenseId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Daily operational expense (a001)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// Operation date as entered in the form (YYYY-MM-DD)
    pub date: String,

    /// Free-form category ("Feed purchase", "Repairs", ...)
    pub category: String,

    /// Amount spent; >= 0 expected, not enforced
    #[serde(default)]
    pub amount: f64,

    #[serde(default)]
    pub notes: String,

    /// Id of the submitting user, "anon" when no principal was attached
    pub created_by: String,

    /// Server-assigned creation timestamp, the only sort key
    pub created_at: DateTime<Utc>,
}

/// Form payload for a new expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub date: String,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub notes: String,
}

impl Expense {
    pub fn new(req: CreateExpenseRequest, created_by: String) -> Self {
        Self {
            id: ExpenseId::new(Uuid::new_v4()),
            date: req.date,
            category: req.category,
            amount: req.amount,
            notes: req.notes,
            created_by,
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.date.trim().is_empty() {
            return Err("Date is required".into());
        }
        if self.category.trim().is_empty() {
            return Err("Category is required".into());
        }
        if !self.amount.is_finite() {
            return Err("Amount must be a number".into());
        }
        Ok(())
    }
}

impl StoreRecord for Expense {
    type Id = ExpenseId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn collection_name() -> &'static str {
        "expenses"
    }

    fn element_name() -> &'static str {
        "Expense"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: f64) -> CreateExpenseRequest {
        CreateExpenseRequest {
            date: "2024-06-01".to_string(),
            category: "Feed purchase".to_string(),
            amount,
            notes: String::new(),
        }
    }

    #[test]
    fn test_validate_accepts_normal_amount() {
        let expense = Expense::new(request(1250.0), "anon".to_string());
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite_amount() {
        let expense = Expense::new(request(f64::NAN), "anon".to_string());
        assert!(expense.validate().is_err());

        let expense = Expense::new(request(f64::INFINITY), "anon".to_string());
        assert!(expense.validate().is_err());
    }

    #[test]
    fn test_missing_amount_defaults_to_zero() {
        let json = r#"{
            "id": "6a1c9d10-0000-0000-0000-000000000001",
            "date": "2024-06-01",
            "category": "Repairs",
            "created_by": "anon",
            "created_at": "2024-06-01T08:00:00Z"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount, 0.0);
        assert_eq!(expense.notes, "");
    }
}
