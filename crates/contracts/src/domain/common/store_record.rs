use chrono::{DateTime, Utc};

use super::RecordId;

/// Behaviour shared by every record kind kept in the store.
///
/// Records are append-only: once written they are never updated or deleted,
/// and `created_at` is the only sort key (descending).
pub trait StoreRecord {
    type Id: RecordId;

    fn id(&self) -> Self::Id;
    fn created_at(&self) -> DateTime<Utc>;

    /// Collection name used in API paths and export file names
    fn collection_name() -> &'static str;

    /// Human-readable name of a single record
    fn element_name() -> &'static str;
}
