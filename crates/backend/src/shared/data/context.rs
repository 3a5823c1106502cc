use std::sync::Arc;

use contracts::domain::a001_expense::record::Expense;
use contracts::domain::a002_egg_log::record::EggLog;
use contracts::domain::a003_feed_log::record::FeedLog;
use contracts::domain::a004_employee::record::Employee;
use contracts::domain::a005_attendance::record::Attendance;
use contracts::domain::a006_mortality_log::record::MortalityLog;
use sea_orm::DatabaseConnection;
use tokio::sync::watch;

use crate::domain;

/// Everything a handler needs: the store connection plus the per-collection
/// snapshot channels. Constructed once at startup and passed through axum
/// state; there are no ambient globals.
#[derive(Clone)]
pub struct AppContext {
    pub db: DatabaseConnection,
    pub channels: Arc<SnapshotChannels>,
}

/// One watch channel per collection.
///
/// Every successful create re-reads the whole collection and publishes the
/// result here; subscribers always observe the latest full snapshot, never
/// a diff. Interleaved publishes across collections cannot corrupt each
/// other since each channel carries a self-contained value.
pub struct SnapshotChannels {
    pub expenses: watch::Sender<Vec<Expense>>,
    pub eggs: watch::Sender<Vec<EggLog>>,
    pub feed: watch::Sender<Vec<FeedLog>>,
    pub employees: watch::Sender<Vec<Employee>>,
    pub attendance: watch::Sender<Vec<Attendance>>,
    pub mortality: watch::Sender<Vec<MortalityLog>>,
}

impl AppContext {
    /// Build the context, seeding every channel with the current snapshot so
    /// a subscriber connecting before any write still gets data immediately.
    pub async fn new(db: DatabaseConnection) -> anyhow::Result<Self> {
        let channels = SnapshotChannels {
            expenses: watch::channel(domain::a001_expense::repository::list_all(&db).await?).0,
            eggs: watch::channel(domain::a002_egg_log::repository::list_all(&db).await?).0,
            feed: watch::channel(domain::a003_feed_log::repository::list_all(&db).await?).0,
            employees: watch::channel(domain::a004_employee::repository::list_all(&db).await?).0,
            attendance: watch::channel(domain::a005_attendance::repository::list_all(&db).await?).0,
            mortality: watch::channel(domain::a006_mortality_log::repository::list_all(&db).await?)
                .0,
        };
        Ok(Self {
            db,
            channels: Arc::new(channels),
        })
    }
}

/// In-memory context for unit tests.
///
/// SQLite `:memory:` databases are per-connection, so the pool is pinned to
/// a single connection to keep the schema visible everywhere.
#[cfg(test)]
pub(crate) async fn test_context() -> AppContext {
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);
    let db = sea_orm::Database::connect(options)
        .await
        .expect("in-memory sqlite");
    super::db::ensure_schema(&db).await.expect("schema");
    AppContext::new(db).await.expect("context")
}
