//! The summary distribution pipeline.
//!
//! Composes the summarization client, markdown renderer, mail transport,
//! and history store into the three operations exposed to callers. Each
//! invocation is an independent request-scoped unit of work; the clients
//! are stateless, so concurrent invocations need no coordination.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use crate::ai::{SummaryClient, Summarizer};
use crate::core::config::AppConfig;
use crate::core::models::SummaryRecord;
use crate::errors::PipelineError;
use crate::mail::{MailTransport, MailerClient};
use crate::render::render_markdown;
use crate::store::{HistoryStore, SqliteHistory};
use crate::utils::recipients::is_plausible_address;

const DEFAULT_DB_PATH: &str = "recap_history.db";

/// Two-phase result of a distribution: delivery is the user-visible
/// contract, persistence is best-effort, and callers can tell "sent but
/// not logged" from "sent and logged".
#[derive(Debug, Clone)]
pub struct DistributeOutcome {
    pub delivered: bool,
    pub recorded: bool,
    pub record_id: Option<i64>,
    pub receipt: crate::mail::DeliveryReceipt,
}

pub struct Pipeline {
    summarizer: Arc<dyn Summarizer>,
    transport: Arc<dyn MailTransport>,
    history: Arc<dyn HistoryStore>,
}

impl Pipeline {
    #[must_use]
    pub fn new(
        summarizer: Arc<dyn Summarizer>,
        transport: Arc<dyn MailTransport>,
        history: Arc<dyn HistoryStore>,
    ) -> Self {
        Self {
            summarizer,
            transport,
            history,
        }
    }

    /// Wire the production clients from process configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, PipelineError> {
        let summarizer = SummaryClient::new(
            config.provider_api_key.clone(),
            config.provider_base_url.clone(),
            config.provider_model.clone(),
        );
        let transport = MailerClient::new(
            config.mail_api_url.clone(),
            config.mail_api_key.clone(),
            config.mail_from.clone(),
        );
        let history = SqliteHistory::open(
            config
                .history_db_path
                .as_deref()
                .unwrap_or(DEFAULT_DB_PATH),
        )?;

        Ok(Self::new(
            Arc::new(summarizer),
            Arc::new(transport),
            Arc::new(history),
        ))
    }

    /// Generate a summary draft for the caller to edit. Delegates straight
    /// to the summarization client; no further stages run.
    pub async fn summarize(
        &self,
        transcript: &str,
        instruction: &str,
    ) -> Result<String, PipelineError> {
        self.summarizer.summarize(transcript, instruction).await
    }

    /// Render, send, then best-effort persist an edited summary.
    ///
    /// A send failure aborts the operation and nothing is persisted. A
    /// persistence failure after a successful send is logged and the
    /// operation still succeeds: the email is already out, and history is
    /// telemetry, not a guarantee.
    pub async fn distribute(
        &self,
        summary_text: &str,
        recipients: &[String],
    ) -> Result<DistributeOutcome, PipelineError> {
        if summary_text.trim().is_empty() {
            return Err(PipelineError::Validation(
                "summary text must not be empty".to_string(),
            ));
        }
        if !recipients.iter().any(|r| is_plausible_address(r)) {
            return Err(PipelineError::Validation(
                "at least one plausible recipient address is required".to_string(),
            ));
        }

        let correlation_id = Uuid::new_v4();

        info!(
            "Rendering summary for distribution to {} recipient(s) (corr_id={})",
            recipients.len(),
            correlation_id
        );
        let summary_html = render_markdown(summary_text);

        info!("Sending summary mail (corr_id={})", correlation_id);
        let receipt = self.transport.distribute(&summary_html, recipients).await?;

        let (recorded, record_id) = match self.history.append(&summary_html, recipients).await {
            Ok(record) => {
                info!(
                    "Recorded summary as history entry {} (corr_id={})",
                    record.id, correlation_id
                );
                (true, Some(record.id))
            }
            Err(e) => {
                // Delivery already happened; persistence stays best-effort.
                error!(
                    "Failed to record distributed summary: {} (corr_id={})",
                    e, correlation_id
                );
                (false, None)
            }
        };

        Ok(DistributeOutcome {
            delivered: true,
            recorded,
            record_id,
            receipt,
        })
    }

    /// The `limit` most recent distributed summaries, newest first.
    pub async fn fetch_history(&self, limit: usize) -> Result<Vec<SummaryRecord>, PipelineError> {
        self.history.fetch_recent(limit).await
    }
}
