//! Catalog loader: one outbound read per mount.
//!
//! Lifecycle is `Idle -> Loading -> {Loaded | Failed}`; a loader never goes
//! back. Hosts with their own event loop use the two-phase form
//! ([`CatalogLoader::begin`] then [`CatalogLoader::settle`]); everyone else
//! calls [`CatalogLoader::load`].

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;

use vitrine_core::{FetchFailure, Product, TransportResult};

use crate::transport::{CATALOG_PATH, Transport, TransportResponse};

/// Where the catalog is in its single load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Product>),
    Failed(FetchFailure),
}

impl CatalogState {
    /// Loaded products in source order; empty in every other state.
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogState::Loaded(products) => products,
            _ => &[],
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CatalogState::Idle | CatalogState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogState::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CatalogState::Failed(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogState::Idle => "idle",
            CatalogState::Loading => "loading",
            CatalogState::Loaded(_) => "loaded",
            CatalogState::Failed(_) => "failed",
        }
    }
}

static NEXT_LOADER_ID: AtomicU64 = AtomicU64::new(1);

/// Proof that a read was started; only [`CatalogLoader::begin`] hands one out.
///
/// A ticket is bound to the loader that issued it.
#[derive(Debug)]
#[must_use = "a fetch ticket must be settled"]
pub struct FetchTicket {
    loader: u64,
}

/// What [`CatalogLoader::settle`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The state moved to Loaded or Failed.
    Applied,
    /// The loader was unmounted while the read was in flight.
    Discarded,
    /// The ticket belongs to another loader, or this loader is not loading.
    Rejected,
}

#[derive(Debug)]
pub struct CatalogLoader {
    id: u64,
    state: CatalogState,
    unmounted: bool,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self {
            id: NEXT_LOADER_ID.fetch_add(1, Ordering::Relaxed),
            state: CatalogState::Idle,
            unmounted: false,
        }
    }
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn into_state(self) -> CatalogState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        !self.unmounted
    }

    /// Start the single read: `Idle -> Loading`.
    ///
    /// Returns `None` when a read was already started or the loader is unmounted.
    pub fn begin(&mut self) -> Option<FetchTicket> {
        if self.unmounted || !matches!(self.state, CatalogState::Idle) {
            return None;
        }

        self.state = CatalogState::Loading;
        tracing::info!(path = CATALOG_PATH, "fetching catalog");
        Some(FetchTicket { loader: self.id })
    }

    /// Apply the outcome of the read started by `ticket`.
    ///
    /// Any rejection, including a payload without a decodable `products`
    /// array, ends in [`CatalogState::Failed`]. Outcomes arriving after
    /// [`CatalogLoader::unmount`] are dropped. A ticket issued by another
    /// loader, or any settle outside `Loading`, leaves the state untouched.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        result: TransportResult<TransportResponse>,
    ) -> Settlement {
        let FetchTicket { loader } = ticket;

        if loader != self.id || !matches!(self.state, CatalogState::Loading) {
            tracing::warn!(
                state = self.state.as_str(),
                foreign = loader != self.id,
                "rejecting catalog settlement"
            );
            return Settlement::Rejected;
        }

        if self.unmounted {
            tracing::debug!(ok = result.is_ok(), "discarding catalog response after unmount");
            return Settlement::Discarded;
        }

        let outcome = result
            .map_err(FetchFailure::from)
            .and_then(|resp| decode_products(resp.data));

        self.state = match outcome {
            Ok(products) => {
                tracing::info!(count = products.len(), "catalog loaded");
                CatalogState::Loaded(products)
            }
            Err(failure) => {
                tracing::warn!(reason = failure.reason(), "catalog load failed");
                CatalogState::Failed(failure)
            }
        };

        Settlement::Applied
    }

    /// Run the whole load against `transport` and return the settled state.
    ///
    /// Calling this again (or after unmount) issues no read.
    pub async fn load<T: Transport + ?Sized>(&mut self, transport: &T) -> &CatalogState {
        if let Some(ticket) = self.begin() {
            let result = transport.get(CATALOG_PATH).await;
            self.settle(ticket, result);
        }
        &self.state
    }

    pub fn unmount(&mut self) {
        if !self.unmounted {
            tracing::debug!(state = self.state.as_str(), "catalog loader unmounted");
        }
        self.unmounted = true;
    }
}

/// Extract the ordered `products` array from a catalog payload.
pub fn decode_products(data: Value) -> Result<Vec<Product>, FetchFailure> {
    let products = match data {
        Value::Object(mut body) => body
            .remove("products")
            .ok_or_else(|| FetchFailure::new("response payload has no `products` field"))?,
        other => {
            return Err(FetchFailure::new(format!(
                "expected a JSON object payload, got {}",
                json_kind(&other)
            )));
        }
    };

    serde_json::from_value(products)
        .map_err(|e| FetchFailure::new(format!("malformed products payload: {e}")))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
