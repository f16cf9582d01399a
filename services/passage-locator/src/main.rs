use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use passage_locator::{
    DocumentSource, FragmentHandle, HighlightStyle, HighlightSurface, InMemoryDocument, LocatorConfig,
    PassageLocator, Query,
};
use serde_json::json;
use shared::config::Settings;
use tokio::task::LocalSet;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Surface that only reports highlight operations in the log.
struct LogSurface;

impl HighlightSurface for LogSurface {
    fn set_style(&self, handle: FragmentHandle, style: HighlightStyle) {
        info!(handle = handle.0, %style, "set style");
    }

    fn clear_style(&self, handle: FragmentHandle) {
        info!(handle = handle.0, "clear style");
    }

    fn scroll_into_view(&self, handle: FragmentHandle) {
        info!(handle = handle.0, "scroll into view");
    }
}

#[derive(Debug, Parser)]
#[command(name = "passage-locator", version)]
#[command(about = "Locate a quoted passage in a JSON document and report where it was highlighted")]
struct Args {
    /// Document as JSON: {"pages": [["fragment", ...], ...]}
    #[arg(value_name = "DOCUMENT")]
    document: PathBuf,
    /// Quoted passage to look for.
    #[arg(value_name = "QUOTE")]
    quote: String,
    /// Only look on this page instead of scanning from page 1.
    #[arg(value_name = "HINT_PAGE", value_parser = clap::value_parser!(u32).range(1..))]
    hint_page: Option<u32>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let local = LocalSet::new();
    local.run_until(async { app_main(args).await }).await
}

async fn app_main(args: Args) -> anyhow::Result<ExitCode> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load().context("invalid LOCATOR_* settings")?;
    info!(?settings, "settings loaded");

    let raw = tokio::fs::read_to_string(&args.document)
        .await
        .with_context(|| format!("failed to read {}", args.document.display()))?;
    let document = InMemoryDocument::from_json(&raw)?;
    info!(pages = document.page_count(), "document loaded");

    let locator = PassageLocator::new(
        Rc::new(document),
        Rc::new(LogSurface),
        LocatorConfig::from(&settings),
    );
    let query = Query {
        text: args.quote,
        hint_page: args.hint_page,
    };

    let outcome = locator.locate(query).await.context("locate task failed")?;
    match outcome {
        Ok(found) => {
            println!("{}", serde_json::to_string_pretty(&json!({ "found": found }))?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{}", serde_json::to_string_pretty(&json!({ "error": e.to_string() }))?);
            Ok(ExitCode::FAILURE)
        }
    }
}
