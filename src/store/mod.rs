//! Append-only history of distributed summaries.

pub mod sqlite;

pub use sqlite::SqliteHistory;

use async_trait::async_trait;

use crate::core::models::SummaryRecord;
use crate::errors::PipelineError;

/// Abstraction over the history persistence backend.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append unconditionally: no deduplication, no idempotency key.
    /// Appending equivalent content twice creates two distinct records.
    /// Returns the stored record with its store-assigned id and timestamp.
    async fn append(
        &self,
        content: &str,
        recipients: &[String],
    ) -> Result<SummaryRecord, PipelineError>;

    /// The `limit` most recently created records, newest first. Fewer if
    /// fewer exist; an empty vec (not an error) when none exist.
    async fn fetch_recent(&self, limit: usize) -> Result<Vec<SummaryRecord>, PipelineError>;
}
