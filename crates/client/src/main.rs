//! Terminal product listing.
//!
//! Loads the catalog once, prints it, then treats each stdin line as a
//! submitted search term.

#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;

#[cfg(not(target_arch = "wasm32"))]
use vitrine_catalog::ProductListing;
#[cfg(not(target_arch = "wasm32"))]
use vitrine_client::{ClientConfig, HttpTransport, SessionOptions, SessionOutcome, run_session};

/// Browse the product catalog from the terminal.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Parser)]
#[command(name = "vitrine", version)]
struct Cli {
    /// API base URL (overrides VITRINE_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Bearer token (overrides VITRINE_AUTH_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Search term applied right after loading
    #[arg(long)]
    term: Option<String>,

    /// Render once and exit instead of reading terms from stdin
    #[arg(long)]
    once: bool,
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    vitrine_observability::init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env().with_overrides(cli.api_url, cli.token);
    config.validate().context("invalid client configuration")?;

    if config.token.is_some() {
        tracing::info!(api_url = %config.api_url, "using authentication token");
    } else {
        tracing::info!(api_url = %config.api_url, "no authentication token configured");
    }

    let mut listing = ProductListing::new(HttpTransport::from_config(&config));
    let options = SessionOptions {
        initial_term: cli.term,
        once: cli.once,
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let outcome = run_session(&mut listing, &options, stdin.lock(), &mut stdout).await?;

    Ok(match outcome {
        SessionOutcome::Loaded { .. } => ExitCode::SUCCESS,
        SessionOutcome::Failed => ExitCode::FAILURE,
    })
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser entry point is `vitrine_client::frontend::main`.
}
