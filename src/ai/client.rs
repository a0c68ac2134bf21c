//! LLM API client module
//!
//! Encapsulates the chat-completions call that turns a transcript and an
//! instruction into a summary draft.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use crate::errors::PipelineError;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Returned instead of an error when the provider answers with no usable
/// content, so the caller always receives some text to edit.
pub const FALLBACK_SUMMARY: &str = "Could not generate summary.";

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Compose the effective prompt: the instruction, a blank line, then the
/// transcript. A blank instruction yields the transcript alone.
#[must_use]
pub fn compose_prompt(transcript: &str, instruction: &str) -> String {
    if instruction.trim().is_empty() {
        transcript.to_string()
    } else {
        format!("{}\n\n{}", instruction, transcript)
    }
}

/// Chat-completions client for generating summary drafts.
pub struct SummaryClient {
    api_key: String,
    base_url: String,
    model_name: String,
    http: Client,
}

impl SummaryClient {
    #[must_use]
    pub fn new(api_key: String, base_url: Option<String>, model_name: Option<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model_name: model_name.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            http,
        }
    }

    fn build_messages(prompt: &str) -> Vec<ChatCompletionMessage> {
        vec![ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(prompt.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }]
    }

    fn request_body(&self, messages: &[ChatCompletionMessage]) -> Value {
        let message_values: Vec<Value> = messages
            .iter()
            .map(|msg| {
                let role_str = match msg.role {
                    MessageRole::system => "system",
                    MessageRole::user => "user",
                    MessageRole::assistant => "assistant",
                    MessageRole::function => "function",
                    MessageRole::tool => "tool",
                };

                let content_val = match &msg.content {
                    Content::Text(text) => json!(text),
                    other => json!(format!("{:?}", other)),
                };

                json!({
                    "role": role_str,
                    "content": content_val
                })
            })
            .collect();

        json!({
            "model": self.model_name,
            "messages": message_values
        })
    }
}

#[async_trait]
impl super::Summarizer for SummaryClient {
    async fn summarize(
        &self,
        transcript: &str,
        instruction: &str,
    ) -> Result<String, PipelineError> {
        let prompt = compose_prompt(transcript, instruction);

        #[cfg(feature = "debug-logs")]
        info!("Using completion prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting summary, estimated prompt tokens: {}",
            estimate_tokens(&prompt)
        );

        let messages = Self::build_messages(&prompt);
        let request_body = self.request_body(&messages);

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| PipelineError::Provider(format!("completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PipelineError::Provider(error_text));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| PipelineError::Provider(format!("failed to parse response: {}", e)))?;

        // First choice's message content, or the fixed fallback when the
        // provider returned nothing usable.
        let summary = response_json
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .filter(|text| !text.trim().is_empty())
            .map_or_else(|| FALLBACK_SUMMARY.to_string(), ToString::to_string);

        Ok(summary)
    }
}
