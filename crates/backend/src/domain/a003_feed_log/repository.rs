use anyhow::Result;
use contracts::domain::a003_feed_log::record::{FeedLog, FeedLogId};
use contracts::domain::common::RecordId;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_feed_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub date: String,
    pub shed: String,
    pub kg: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FeedLog {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        FeedLog {
            id: FeedLogId::new(uuid),
            date: m.date,
            shed: m.shed,
            kg: m.kg,
            created_at: m.created_at,
        }
    }
}

pub async fn insert(db: &DatabaseConnection, record: &FeedLog) -> Result<()> {
    let active = ActiveModel {
        id: Set(record.id.as_string()),
        date: Set(record.date.clone()),
        shed: Set(record.shed.clone()),
        kg: Set(record.kg),
        created_at: Set(record.created_at),
    };
    Entity::insert(active).exec(db).await?;
    Ok(())
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<FeedLog>> {
    let models = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}
