use anyhow::Result;
use contracts::domain::a004_employee::record::{Employee, EmployeeId};
use contracts::domain::common::RecordId;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub role: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Employee {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        Employee {
            id: EmployeeId::new(uuid),
            name: m.name,
            phone: m.phone,
            role: m.role,
            created_at: m.created_at,
        }
    }
}

pub async fn insert(db: &DatabaseConnection, record: &Employee) -> Result<()> {
    let active = ActiveModel {
        id: Set(record.id.as_string()),
        name: Set(record.name.clone()),
        phone: Set(record.phone.clone()),
        role: Set(record.role.clone()),
        created_at: Set(record.created_at),
    };
    Entity::insert(active).exec(db).await?;
    Ok(())
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Employee>> {
    let models = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}
