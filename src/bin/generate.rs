//! CLI tool to run a one-shot generation through the failover client
//!
//! Usage:
//!   cargo run --bin generate -- "Summarize RFC 2616 in one paragraph"
//!   cargo run --bin generate -- --json "List three fruits as a JSON array"

use anyhow::Result;
use clap::Parser;
use llm_failover::{logging, FailoverClient, RequestMode, Settings};

/// Run one generation request across the configured key pool
#[derive(Parser, Debug)]
#[command(name = "generate")]
#[command(about = "Run one generation request across the configured key pool")]
struct Args {
    /// Prompt text to send
    prompt: String,

    /// Request a raw JSON document instead of plain text
    #[arg(long)]
    json: bool,

    /// Model name (overrides GEMINI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Log level: trace, debug, info, warn, error (overrides LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load()?;

    // Override settings with CLI arguments
    if let Some(model) = args.model {
        settings.gemini_model = model;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    logging::init(&settings.log_level);

    let client = FailoverClient::from_settings(&settings)?;

    let mode = if args.json {
        RequestMode::StructuredJson
    } else {
        RequestMode::PlainText
    };

    let text = client.generate(&args.prompt, mode).await?;

    println!("{}", text);

    Ok(())
}
