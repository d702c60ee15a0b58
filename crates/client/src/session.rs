//! Line-oriented terminal session over a [`ProductListing`].
//!
//! Each input line is one submitted search term (an empty line clears the
//! filter). The listing is re-rendered after every submit.

use std::io::{BufRead, Write};

use anyhow::Context;

use vitrine_catalog::{ProductListing, Transport};

use crate::render::render_text;

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Term submitted right after the catalog loads.
    pub initial_term: Option<String>,
    /// Render once and stop without reading input.
    pub once: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Loaded { submits: usize },
    Failed,
}

/// Mount `listing`, render it, then process submitted terms from `input`.
pub async fn run_session<T: Transport>(
    listing: &mut ProductListing<T>,
    options: &SessionOptions,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<SessionOutcome> {
    listing.mount().await;

    if let Some(term) = &options.initial_term {
        listing.submit(term.clone());
    }
    render(listing, out)?;

    if listing.state().is_failed() {
        listing.unmount();
        return Ok(SessionOutcome::Failed);
    }

    let mut submits = 0;
    if !options.once {
        for line in input.lines() {
            let term = line.context("failed to read search term")?;
            listing.submit(term);
            submits += 1;
            render(listing, out)?;
        }
    }

    listing.unmount();
    tracing::debug!(submits, "session finished");
    Ok(SessionOutcome::Loaded { submits })
}

fn render<T: Transport>(listing: &ProductListing<T>, out: &mut impl Write) -> anyhow::Result<()> {
    render_text(&listing.view(), out).context("failed to write listing")?;
    writeln!(out).context("failed to write listing")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}
