use anyhow::Result;
use contracts::domain::a001_expense::record::{Expense, ExpenseId};
use contracts::domain::common::RecordId;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_expense")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub notes: String,
    pub created_by: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Expense {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        Expense {
            id: ExpenseId::new(uuid),
            date: m.date,
            category: m.category,
            amount: m.amount,
            notes: m.notes,
            created_by: m.created_by,
            created_at: m.created_at,
        }
    }
}

/// Append one record; rows are never updated afterwards
pub async fn insert(db: &DatabaseConnection, record: &Expense) -> Result<()> {
    let active = ActiveModel {
        id: Set(record.id.as_string()),
        date: Set(record.date.clone()),
        category: Set(record.category.clone()),
        amount: Set(record.amount),
        notes: Set(record.notes.clone()),
        created_by: Set(record.created_by.clone()),
        created_at: Set(record.created_at),
    };
    Entity::insert(active).exec(db).await?;
    Ok(())
}

/// Full snapshot, newest first (the only read order in the system)
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Expense>> {
    let models = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::domain::a001_expense::record::CreateExpenseRequest;

    fn record_at(date: &str, hour: u32) -> Expense {
        let mut record = Expense::new(
            CreateExpenseRequest {
                date: date.to_string(),
                category: "Feed purchase".to_string(),
                amount: 10.0,
                notes: String::new(),
            },
            "anon".to_string(),
        );
        record.created_at = chrono::Utc
            .with_ymd_and_hms(2024, 6, 1, hour, 0, 0)
            .unwrap();
        record
    }

    #[tokio::test]
    async fn test_list_all_orders_by_creation_desc() {
        let ctx = crate::shared::data::context::test_context().await;

        let older = record_at("2024-06-01", 8);
        let newer = record_at("2024-06-01", 9);
        insert(&ctx.db, &older).await.unwrap();
        insert(&ctx.db, &newer).await.unwrap();

        let all = list_all(&ctx.db).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, newer.id);
        assert_eq!(all[1].id, older.id);
    }
}
