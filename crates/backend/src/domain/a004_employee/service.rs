use contracts::domain::a004_employee::record::{CreateEmployeeRequest, Employee};
use contracts::domain::common::RecordId;

use super::repository;
use crate::shared::data::context::AppContext;
use crate::shared::error::StoreError;

pub async fn create(ctx: &AppContext, req: CreateEmployeeRequest) -> Result<Employee, StoreError> {
    let record = Employee::new(req);
    record.validate().map_err(StoreError::Invalid)?;
    repository::insert(&ctx.db, &record).await?;
    publish_snapshot(ctx).await?;
    tracing::info!("Created employee {}", record.id.as_string());
    Ok(record)
}

pub async fn publish_snapshot(ctx: &AppContext) -> Result<(), StoreError> {
    let snapshot = repository::list_all(&ctx.db).await?;
    ctx.channels.employees.send_replace(snapshot);
    Ok(())
}

pub async fn list_all(ctx: &AppContext) -> Result<Vec<Employee>, StoreError> {
    Ok(repository::list_all(&ctx.db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::context::test_context;

    #[tokio::test]
    async fn test_empty_name_is_rejected() {
        let ctx = test_context().await;
        let err = create(
            &ctx,
            CreateEmployeeRequest {
                name: "  ".to_string(),
                phone: String::new(),
                role: String::new(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
    }
}
