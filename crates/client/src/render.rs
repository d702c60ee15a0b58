//! Plain-text rendering of a listing view.

use std::io::{self, Write};

use serde_json::Value;

use vitrine_catalog::{ListingView, ProductCard};

/// Write `view` to `out`.
///
/// Pending renders nothing. Failed renders only the error message. Loaded
/// renders the count label, then one line per card.
pub fn render_text(view: &ListingView<'_>, out: &mut impl Write) -> io::Result<()> {
    match view {
        ListingView::Pending => Ok(()),
        ListingView::Failed { message } => writeln!(out, "{message}"),
        ListingView::Products { cards, count_label } => {
            writeln!(out, "{count_label}")?;
            for card in cards {
                writeln!(out, "{}", card_line(card))?;
            }
            Ok(())
        }
    }
}

fn card_line(card: &ProductCard<'_>) -> String {
    let mut line = format!("[{}] {}", card.key, card.product.title());
    match card.product.field("price") {
        Some(Value::String(price)) => line.push_str(&format!(" - {price}")),
        Some(Value::Number(price)) => line.push_str(&format!(" - {price}")),
        _ => {}
    }
    line
}
