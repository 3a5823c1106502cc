use contracts::domain::a006_mortality_log::record::{CreateMortalityLogRequest, MortalityLog};
use contracts::domain::common::RecordId;

use super::repository;
use crate::shared::data::context::AppContext;
use crate::shared::error::StoreError;

pub async fn create(
    ctx: &AppContext,
    req: CreateMortalityLogRequest,
) -> Result<MortalityLog, StoreError> {
    let record = MortalityLog::new(req);
    record.validate().map_err(StoreError::Invalid)?;
    repository::insert(&ctx.db, &record).await?;
    publish_snapshot(ctx).await?;
    tracing::info!("Created mortality report {}", record.id.as_string());
    Ok(record)
}

pub async fn publish_snapshot(ctx: &AppContext) -> Result<(), StoreError> {
    let snapshot = repository::list_all(&ctx.db).await?;
    ctx.channels.mortality.send_replace(snapshot);
    Ok(())
}

pub async fn list_all(ctx: &AppContext) -> Result<Vec<MortalityLog>, StoreError> {
    Ok(repository::list_all(&ctx.db).await?)
}
