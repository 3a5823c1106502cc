use anyhow::Result;
use contracts::domain::a006_mortality_log::record::{MortalityLog, MortalityLogId};
use contracts::domain::common::RecordId;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a006_mortality_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub date: String,
    pub shed: String,
    pub count: i64,
    pub reason: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MortalityLog {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        MortalityLog {
            id: MortalityLogId::new(uuid),
            date: m.date,
            shed: m.shed,
            count: m.count,
            reason: m.reason,
            created_at: m.created_at,
        }
    }
}

pub async fn insert(db: &DatabaseConnection, record: &MortalityLog) -> Result<()> {
    let active = ActiveModel {
        id: Set(record.id.as_string()),
        date: Set(record.date.clone()),
        shed: Set(record.shed.clone()),
        count: Set(record.count),
        reason: Set(record.reason.clone()),
        created_at: Set(record.created_at),
    };
    Entity::insert(active).exec(db).await?;
    Ok(())
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<MortalityLog>> {
    let models = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}
