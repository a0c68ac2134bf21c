//! Summarization provider integration.

pub mod client;

pub use client::{FALLBACK_SUMMARY, SummaryClient, compose_prompt, estimate_tokens};

use async_trait::async_trait;

use crate::errors::PipelineError;

/// Abstraction over the text-generation provider.
///
/// One call, one summary. Implementations must not retry: the pipeline's
/// contract is at-most-one-attempt per invocation.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Generate a summary of `transcript` following `instruction`.
    ///
    /// Inputs are forwarded exactly as received; validation is the
    /// caller's job. An empty instruction yields a transcript-only prompt.
    async fn summarize(&self, transcript: &str, instruction: &str)
    -> Result<String, PipelineError>;
}
