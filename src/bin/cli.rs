use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use recap::api::{
    DistributeRequest, FetchHistoryRequest, RecipientsField, SummarizeRequest, handle_distribute,
    handle_fetch_history, handle_summarize,
};
use recap::core::config::AppConfig;
use recap::pipeline::Pipeline;

#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(about = "Summarize meeting transcripts and share them by email", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Generate an editable summary draft from a transcript file
    Summarize(SummarizeArgs),
    /// Render, email, and record an edited summary
    Distribute(DistributeArgs),
    /// List recently distributed summaries
    History(HistoryArgs),
}

#[derive(Args, Debug)]
struct SummarizeArgs {
    /// Path to the transcript text file
    #[arg(long)]
    transcript: PathBuf,
    /// Instruction for the summarizer, e.g. "Summarize as bullet points"
    #[arg(long)]
    instruction: String,
}

#[derive(Args, Debug)]
struct DistributeArgs {
    /// Path to the (edited) summary markdown file
    #[arg(long)]
    summary: PathBuf,
    /// Recipient addresses, comma-separated
    #[arg(long)]
    to: String,
}

#[derive(Args, Debug)]
struct HistoryArgs {
    /// Maximum number of entries to show
    #[arg(long, default_value_t = 10)]
    limit: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    recap::setup_logging();

    let cli = Cli::parse();
    let config = AppConfig::from_env().map_err(|e| anyhow!("missing configuration: {}", e))?;
    let pipeline = Pipeline::from_config(&config)?;

    match cli.command {
        CliCommand::Summarize(args) => {
            let transcript = std::fs::read_to_string(&args.transcript)
                .with_context(|| format!("failed to read {}", args.transcript.display()))?;

            let response = handle_summarize(
                &pipeline,
                &SummarizeRequest {
                    transcript,
                    instruction: args.instruction,
                },
            )
            .await?;

            println!("{}", response.summary_text);
        }
        CliCommand::Distribute(args) => {
            let summary_text = std::fs::read_to_string(&args.summary)
                .with_context(|| format!("failed to read {}", args.summary.display()))?;

            let response = handle_distribute(
                &pipeline,
                &DistributeRequest {
                    summary_text,
                    recipients: RecipientsField::One(args.to),
                },
            )
            .await;

            if response.success {
                let recorded = response.recorded.unwrap_or(false);
                println!(
                    "Summary sent{}",
                    if recorded {
                        " and recorded in history"
                    } else {
                        " (history entry could not be written)"
                    }
                );
                if let Some(receipt) = response.receipt
                    && let Some(message_id) = receipt.message_id
                {
                    println!("Provider message id: {}", message_id);
                }
            } else {
                return Err(anyhow!(
                    response
                        .error_message
                        .unwrap_or_else(|| "unknown distribution failure".to_string())
                ));
            }
        }
        CliCommand::History(args) => {
            let response =
                handle_fetch_history(&pipeline, &FetchHistoryRequest { limit: args.limit }).await;

            match (response.records, response.error_message) {
                (Some(records), _) if records.is_empty() => {
                    println!("No summaries have been distributed yet.");
                }
                (Some(records), _) => {
                    for record in records {
                        println!(
                            "#{} {} -> {}",
                            record.id,
                            record.created_at.format("%Y-%m-%d %H:%M:%S"),
                            record.recipients.join(", ")
                        );
                    }
                }
                (None, message) => {
                    return Err(anyhow!(
                        message.unwrap_or_else(|| "history unavailable".to_string())
                    ));
                }
            }
        }
    }

    Ok(())
}
