use contracts::domain::a003_feed_log::record::{CreateFeedLogRequest, FeedLog};
use contracts::domain::common::RecordId;

use super::repository;
use crate::shared::data::context::AppContext;
use crate::shared::error::StoreError;

pub async fn create(ctx: &AppContext, req: CreateFeedLogRequest) -> Result<FeedLog, StoreError> {
    let record = FeedLog::new(req);
    record.validate().map_err(StoreError::Invalid)?;
    repository::insert(&ctx.db, &record).await?;
    publish_snapshot(ctx).await?;
    tracing::info!("Created feed record {}", record.id.as_string());
    Ok(record)
}

pub async fn publish_snapshot(ctx: &AppContext) -> Result<(), StoreError> {
    let snapshot = repository::list_all(&ctx.db).await?;
    ctx.channels.feed.send_replace(snapshot);
    Ok(())
}

pub async fn list_all(ctx: &AppContext) -> Result<Vec<FeedLog>, StoreError> {
    Ok(repository::list_all(&ctx.db).await?)
}
