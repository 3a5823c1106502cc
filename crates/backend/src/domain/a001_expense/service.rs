use contracts::domain::a001_expense::record::{CreateExpenseRequest, Expense};
use contracts::domain::common::RecordId;

use super::repository;
use crate::shared::data::context::AppContext;
use crate::shared::error::StoreError;

/// Create one expense record and push the refreshed snapshot to
/// subscribers. `created_by` falls back to the "anon" sentinel when no
/// principal was attached.
pub async fn create(
    ctx: &AppContext,
    req: CreateExpenseRequest,
    created_by: Option<String>,
) -> Result<Expense, StoreError> {
    let record = Expense::new(req, created_by.unwrap_or_else(|| "anon".to_string()));
    record.validate().map_err(StoreError::Invalid)?;
    repository::insert(&ctx.db, &record).await?;
    publish_snapshot(ctx).await?;
    tracing::info!("Created expense {}", record.id.as_string());
    Ok(record)
}

/// Re-read the whole collection and publish it; subscribers replace their
/// previous snapshot wholesale.
pub async fn publish_snapshot(ctx: &AppContext) -> Result<(), StoreError> {
    let snapshot = repository::list_all(&ctx.db).await?;
    ctx.channels.expenses.send_replace(snapshot);
    Ok(())
}

pub async fn list_all(ctx: &AppContext) -> Result<Vec<Expense>, StoreError> {
    Ok(repository::list_all(&ctx.db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::context::test_context;

    fn request(date: &str, amount: f64) -> CreateExpenseRequest {
        CreateExpenseRequest {
            date: date.to_string(),
            category: "Repairs".to_string(),
            amount,
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_persists_and_publishes_snapshot() {
        let ctx = test_context().await;
        let mut rx = ctx.channels.expenses.subscribe();
        assert!(rx.borrow().is_empty());

        create(&ctx, request("2024-06-01", 150.0), Some("u-1".to_string()))
            .await
            .unwrap();

        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].amount, 150.0);
        assert_eq!(snapshot[0].created_by, "u-1");
    }

    #[tokio::test]
    async fn test_created_by_falls_back_to_anon() {
        let ctx = test_context().await;
        let record = create(&ctx, request("2024-06-01", 1.0), None).await.unwrap();
        assert_eq!(record.created_by, "anon");
    }

    #[tokio::test]
    async fn test_non_finite_amount_is_rejected() {
        let ctx = test_context().await;
        let err = create(&ctx, request("2024-06-01", f64::NAN), None)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
        // nothing was stored
        assert!(list_all(&ctx).await.unwrap().is_empty());
    }
}
