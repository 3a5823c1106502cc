use axum::response::sse::{Event, KeepAlive, Sse};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};

pub mod a001_expense;
pub mod a002_egg_log;
pub mod a003_feed_log;
pub mod a004_employee;
pub mod a005_attendance;
pub mod a006_mortality_log;

/// Access token for SSE subscriptions. EventSource cannot send headers,
/// so the token travels as a query parameter instead.
#[derive(Debug, Deserialize)]
pub struct SubscribeQuery {
    pub token: String,
}

/// Stream of full-collection snapshots.
///
/// The receiver's current value is delivered immediately on connect; every
/// publish afterwards delivers the complete new snapshot, never a diff.
pub(crate) fn snapshot_stream<T>(
    rx: watch::Receiver<Vec<T>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>>
where
    T: Serialize + Clone + Send + Sync + 'static,
{
    let stream = WatchStream::new(rx).map(|snapshot| Event::default().json_data(&snapshot));
    Sse::new(stream).keep_alive(KeepAlive::default())
}
