//! Recap - a meeting-transcript summarization and distribution pipeline.
//!
//! The crate takes a raw meeting transcript plus an instruction, produces
//! an editable summary draft through an external chat-completions
//! provider, and then distributes the edited draft: render the markdown to
//! a safe HTML fragment, send it by email to every recipient in a single
//! delivery, and record the result in an append-only history store.
//!
//! # Architecture
//!
//! The pipeline composes four leaf components behind trait seams:
//! - [`ai::SummaryClient`]: one chat-completions call per summary
//! - [`render::render_markdown`]: pure markdown to HTML fragment
//! - [`mail::MailerClient`]: one message to all recipients via the HTTP
//!   mail-delivery API
//! - [`store::SqliteHistory`]: append-only SQLite history, newest first
//!
//! [`pipeline::Pipeline`] wires them together. Delivery and persistence
//! are deliberately not transactional: a send failure aborts the
//! operation before anything is persisted, while a persistence failure
//! after a successful send is logged and the operation still reports
//! success. The [`api`] module carries the request/response shapes and the
//! entry handlers an external shell calls.
//!
//! # Example
//!
//! ```no_run
//! use recap::core::config::AppConfig;
//! use recap::pipeline::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     recap::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let pipeline = Pipeline::from_config(&config)?;
//!
//!     let draft = pipeline
//!         .summarize(
//!             "Alice: let's ship v2 by Friday.",
//!             "Summarize as bullet points",
//!         )
//!         .await?;
//!
//!     let outcome = pipeline
//!         .distribute(&draft, &["a@x.com".to_string(), "b@x.com".to_string()])
//!         .await?;
//!     println!("delivered={} recorded={}", outcome.delivered, outcome.recorded);
//!
//!     for record in pipeline.fetch_history(10).await? {
//!         println!("#{} at {}", record.id, record.created_at);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod mail;
pub mod pipeline;
pub mod render;
pub mod store;
pub mod utils;

pub use errors::PipelineError;

/// Configure structured logging with an environment filter.
///
/// Call once at process start; the `RUST_LOG` variable narrows or widens
/// the output in the usual way.
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
