use contracts::domain::a002_egg_log::record::{CreateEggLogRequest, EggLog};
use contracts::domain::common::RecordId;

use super::repository;
use crate::shared::data::context::AppContext;
use crate::shared::error::StoreError;

pub async fn create(ctx: &AppContext, req: CreateEggLogRequest) -> Result<EggLog, StoreError> {
    let record = EggLog::new(req);
    record.validate().map_err(StoreError::Invalid)?;
    repository::insert(&ctx.db, &record).await?;
    publish_snapshot(ctx).await?;
    tracing::info!("Created egg record {}", record.id.as_string());
    Ok(record)
}

pub async fn publish_snapshot(ctx: &AppContext) -> Result<(), StoreError> {
    let snapshot = repository::list_all(&ctx.db).await?;
    ctx.channels.eggs.send_replace(snapshot);
    Ok(())
}

pub async fn list_all(ctx: &AppContext) -> Result<Vec<EggLog>, StoreError> {
    Ok(repository::list_all(&ctx.db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::context::test_context;

    #[tokio::test]
    async fn test_broken_defaults_to_zero_through_the_store() {
        let ctx = test_context().await;
        let req: CreateEggLogRequest =
            serde_json::from_str(r#"{"date": "2024-06-01", "shed": "A", "collected": 50}"#)
                .unwrap();

        create(&ctx, req).await.unwrap();

        let all = list_all(&ctx).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].collected, 50);
        assert_eq!(all[0].broken, 0);
    }

    #[tokio::test]
    async fn test_each_create_publishes_a_full_snapshot() {
        let ctx = test_context().await;
        let mut rx = ctx.channels.eggs.subscribe();

        for i in 0..3 {
            let req = CreateEggLogRequest {
                date: "2024-06-01".to_string(),
                shed: "A".to_string(),
                collected: 10 + i,
                broken: 0,
            };
            create(&ctx, req).await.unwrap();
        }

        // the last published value is the whole collection, not a diff
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.len(), 3);
    }
}
