//! Mail API client module
//!
//! Encapsulates the single outbound call to the HTTP mail-delivery
//! provider. The pipeline never inspects the receipt beyond logging it;
//! any 2xx response is overall success.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use super::template;
use crate::errors::PipelineError;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const PLAIN_TEXT_WIDTH: usize = 80;

/// Opaque provider confirmation, parsed leniently: providers differ in
/// which of these fields they return.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReceipt {
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub accepted: Vec<String>,
    #[serde(default)]
    pub rejected: Vec<String>,
}

/// Client for the HTTP mail-delivery API.
pub struct MailerClient {
    api_url: String,
    api_key: String,
    from_address: String,
    http: Client,
}

impl MailerClient {
    #[must_use]
    pub fn new(api_url: String, api_key: String, from_address: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            api_url,
            api_key,
            from_address,
            http,
        }
    }

    /// Build the provider request payload. Recipients travel as a single
    /// comma-joined destination list; the plain-text part is derived from
    /// the templated HTML body.
    #[must_use]
    pub fn build_payload(&self, summary_html: &str, recipients: &[String]) -> Value {
        let body_html = template::wrap_summary(summary_html);
        let body_text =
            html2text::from_read(body_html.as_bytes(), PLAIN_TEXT_WIDTH).unwrap_or_default();

        json!({
            "from": self.from_address,
            "to": recipients.join(", "),
            "subject": template::SUBJECT,
            "html": body_html,
            "text": body_text,
        })
    }
}

#[async_trait]
impl super::MailTransport for MailerClient {
    async fn distribute(
        &self,
        summary_html: &str,
        recipients: &[String],
    ) -> Result<DeliveryReceipt, PipelineError> {
        let payload = self.build_payload(summary_html, recipients);

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| PipelineError::Transport(format!("mail request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(PipelineError::Transport(format!(
                "mail provider returned {}: {}",
                status, body_text
            )));
        }

        let receipt = response
            .json::<DeliveryReceipt>()
            .await
            .unwrap_or_default();

        info!(
            "Mail accepted by provider, message_id={:?}, recipients={}",
            receipt.message_id,
            recipients.len()
        );

        Ok(receipt)
    }
}
