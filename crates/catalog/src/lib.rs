//! `vitrine-catalog` — the fetch-then-filter state machine.
//!
//! A [`ProductListing`] owns one [`CatalogLoader`] (one read per mount) and one
//! [`SearchFilter`] (the submitted term). What gets shown is always derived from
//! those two with [`derive_view`]; nothing derived is stored.

pub mod label;
pub mod listing;
pub mod loader;
pub mod search;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use label::count_label;
pub use listing::{FETCH_ERROR_MESSAGE, ListingView, ProductCard, ProductListing, derive_view};
pub use loader::{CatalogLoader, CatalogState, FetchTicket, Settlement, decode_products};
pub use search::{SearchFilter, filter_products, matches};
pub use transport::{CATALOG_PATH, Transport, TransportResponse};
