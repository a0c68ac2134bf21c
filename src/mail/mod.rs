//! Email distribution for rendered summaries.

pub mod client;
pub mod template;

pub use client::{DeliveryReceipt, MailerClient};

use async_trait::async_trait;

use crate::errors::PipelineError;

/// Abstraction over the outbound mail channel.
///
/// One message, one delivery: all recipients are addressed together and a
/// failed send is final (no retry, no partial-recipient retry).
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Wrap `summary_html` in the presentational template and send it to
    /// every recipient as a single delivery. The receipt is opaque to the
    /// pipeline; any protocol-level success is overall success.
    async fn distribute(
        &self,
        summary_html: &str,
        recipients: &[String],
    ) -> Result<DeliveryReceipt, PipelineError>;
}
