//! SQLite-backed history store — raw SQL with rusqlite, no ORM.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;

use crate::core::models::SummaryRecord;
use crate::errors::PipelineError;

pub struct SqliteHistory {
    conn: Mutex<Connection>,
}

impl SqliteHistory {
    /// Open (or create) the history database at `path` and run the
    /// idempotent migration.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PipelineError::Persistence(format!("failed to create database directory: {}", e))
            })?;
        }

        let conn = Connection::open(path)?;
        migrate(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self, PipelineError> {
        let conn = Connection::open_in_memory()?;
        migrate(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, PipelineError> {
        self.conn
            .lock()
            .map_err(|_| PipelineError::Persistence("history connection poisoned".to_string()))
    }
}

pub fn migrate(conn: &Connection) -> Result<(), PipelineError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS summaries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content TEXT NOT NULL,
            recipients TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_summaries_created_at ON summaries(created_at DESC)",
        [],
    )?;

    Ok(())
}

#[async_trait]
impl super::HistoryStore for SqliteHistory {
    async fn append(
        &self,
        content: &str,
        recipients: &[String],
    ) -> Result<SummaryRecord, PipelineError> {
        let created_at = Utc::now();
        // RFC 3339 with fixed millisecond precision so lexicographic order
        // on the column matches chronological order.
        let created_at_text = created_at.to_rfc3339_opts(SecondsFormat::Millis, true);
        let recipients_json = serde_json::to_string(recipients)?;

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO summaries (content, recipients, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![content, recipients_json, created_at_text],
        )?;

        Ok(SummaryRecord {
            id: conn.last_insert_rowid(),
            content: content.to_string(),
            recipients: recipients.to_vec(),
            created_at,
        })
    }

    async fn fetch_recent(&self, limit: usize) -> Result<Vec<SummaryRecord>, PipelineError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, content, recipients, created_at FROM summaries
             ORDER BY created_at DESC, id DESC LIMIT ?1",
        )?;

        let records = stmt
            .query_map([limit], |row| {
                let id: i64 = row.get(0)?;
                let content: String = row.get(1)?;
                let recipients_json: String = row.get(2)?;
                let created_at_text: String = row.get(3)?;

                let recipients: Vec<String> = serde_json::from_str(&recipients_json)
                    .map_err(|_| rusqlite::Error::InvalidQuery)?;
                let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_at_text)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|_| rusqlite::Error::InvalidQuery)?;

                Ok(SummaryRecord {
                    id,
                    content,
                    recipients,
                    created_at,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }
}
