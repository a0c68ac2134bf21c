use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A distributed summary as persisted by the history store.
///
/// Records are immutable once created: `id` and `created_at` are assigned
/// by the store at append time, `content` is the rendered HTML fragment
/// that was mailed out, and `recipients` preserves the order (and any
/// duplicates) the caller supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub id: i64,
    pub content: String,
    pub recipients: Vec<String>,
    pub created_at: DateTime<Utc>,
}
