//! Catalog transport for the browser.

use crate::config::DEFAULT_API_URL;
use crate::http::HttpTransport;

/// Transport aimed at the page's own origin.
///
/// reqwest needs an absolute URL even on wasm32, so the origin is read from
/// `window.location`; outside a window it falls back to the default API URL.
pub fn catalog_transport() -> HttpTransport {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    HttpTransport::new(origin)
}
