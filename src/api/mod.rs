//! Entry-point request/response shapes and handlers.
//!
//! This is the boundary an external shell (HTTP layer, CLI, tests) talks
//! to. Caller-side validation and recipient-shape normalization happen
//! here; nothing deeper in the pipeline branches on input shape.

use serde::{Deserialize, Serialize};

use crate::core::models::SummaryRecord;
use crate::errors::PipelineError;
use crate::mail::DeliveryReceipt;
use crate::pipeline::Pipeline;
use crate::utils::recipients::split_address_list;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    pub transcript: String,
    #[serde(default)]
    pub instruction: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub summary_text: String,
}

/// Recipients arrive either as one comma-separated string or as a list of
/// addresses (entries of which may themselves be comma-joined).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipientsField {
    One(String),
    Many(Vec<String>),
}

impl RecipientsField {
    /// Normalize to a single ordered address list. Order is preserved and
    /// duplicates are kept.
    #[must_use]
    pub fn normalize(&self) -> Vec<String> {
        match self {
            RecipientsField::One(raw) => split_address_list(raw),
            RecipientsField::Many(entries) => entries
                .iter()
                .flat_map(|entry| split_address_list(entry))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributeRequest {
    pub summary_text: String,
    pub recipients: RecipientsField,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<DeliveryReceipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

fn default_limit() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchHistoryRequest {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for FetchHistoryRequest {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchHistoryResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<SummaryRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Generate a summary draft. Transcript and instruction are required
/// here, before the provider is ever called.
pub async fn handle_summarize(
    pipeline: &Pipeline,
    request: &SummarizeRequest,
) -> Result<SummarizeResponse, PipelineError> {
    if request.transcript.trim().is_empty() {
        return Err(PipelineError::Validation(
            "transcript must not be empty".to_string(),
        ));
    }
    if request.instruction.trim().is_empty() {
        return Err(PipelineError::Validation(
            "instruction must not be empty".to_string(),
        ));
    }

    let summary_text = pipeline
        .summarize(&request.transcript, &request.instruction)
        .await?;

    Ok(SummarizeResponse { summary_text })
}

/// Distribute an edited summary. Pipeline failures fold into
/// `{success: false, errorMessage}`; rendering them is the caller's job.
pub async fn handle_distribute(
    pipeline: &Pipeline,
    request: &DistributeRequest,
) -> DistributeResponse {
    let recipients = request.recipients.normalize();

    match pipeline.distribute(&request.summary_text, &recipients).await {
        Ok(outcome) => DistributeResponse {
            success: true,
            recorded: Some(outcome.recorded),
            record_id: outcome.record_id,
            receipt: Some(outcome.receipt),
            error_message: None,
        },
        Err(e) => DistributeResponse {
            success: false,
            recorded: None,
            record_id: None,
            receipt: None,
            error_message: Some(e.to_string()),
        },
    }
}

/// Fetch the most recent distributed summaries, newest first.
pub async fn handle_fetch_history(
    pipeline: &Pipeline,
    request: &FetchHistoryRequest,
) -> FetchHistoryResponse {
    if request.limit == 0 {
        return FetchHistoryResponse {
            success: false,
            records: None,
            error_message: Some("limit must be a positive integer".to_string()),
        };
    }

    match pipeline.fetch_history(request.limit).await {
        Ok(records) => FetchHistoryResponse {
            success: true,
            records: Some(records),
            error_message: None,
        },
        Err(e) => FetchHistoryResponse {
            success: false,
            records: None,
            error_message: Some(e.to_string()),
        },
    }
}
