use contracts::domain::a005_attendance::record::{Attendance, CreateAttendanceRequest};

use super::repository;
use crate::shared::data::context::AppContext;
use crate::shared::error::StoreError;

pub async fn create(ctx: &AppContext, req: CreateAttendanceRequest) -> Result<Attendance, StoreError> {
    let record = Attendance::new(req);
    record.validate().map_err(StoreError::Invalid)?;
    repository::insert(&ctx.db, &record).await?;
    publish_snapshot(ctx).await?;
    tracing::info!(
        "Marked {} as {} on {}",
        record.employee,
        record.status,
        record.date
    );
    Ok(record)
}

pub async fn publish_snapshot(ctx: &AppContext) -> Result<(), StoreError> {
    let snapshot = repository::list_all(&ctx.db).await?;
    ctx.channels.attendance.send_replace(snapshot);
    Ok(())
}

pub async fn list_all(ctx: &AppContext) -> Result<Vec<Attendance>, StoreError> {
    Ok(repository::list_all(&ctx.db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::context::test_context;
    use contracts::shared::aggregate::attendance_ratio;

    #[tokio::test]
    async fn test_ratio_over_stored_marks() {
        let ctx = test_context().await;
        for status in ["Present", "Present", "Absent"] {
            create(
                &ctx,
                CreateAttendanceRequest {
                    date: "2024-06-01".to_string(),
                    employee: "Asha".to_string(),
                    status: status.to_string(),
                },
            )
            .await
            .unwrap();
        }

        let ratio = attendance_ratio(&list_all(&ctx).await.unwrap());
        assert_eq!(ratio.display(), "2/3");
    }
}
