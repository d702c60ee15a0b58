//! Outbound read capability.
//!
//! The loader never talks to the network directly; it is handed something that
//! implements [`Transport`]. Native builds use the reqwest client in
//! `vitrine-client`, tests use an in-memory fake.

use async_trait::async_trait;
use serde_json::Value;

use vitrine_core::TransportResult;

/// Resource path of the product catalog.
pub const CATALOG_PATH: &str = "/api/products";

/// A successful response; `data` is the decoded JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub data: Value,
}

impl TransportResponse {
    pub fn new(data: Value) -> Self {
        Self { data }
    }
}

/// Issues GET requests against the catalog API.
///
/// Futures are not required to be `Send`: the listing runs on a single
/// cooperative event loop (a browser tab or a current-thread runtime).
#[async_trait(?Send)]
pub trait Transport {
    /// Read `path` (relative to whatever base the transport was built with).
    ///
    /// Any `Err` is a rejection; callers do not branch on the variant.
    async fn get(&self, path: &str) -> TransportResult<TransportResponse>;
}

#[async_trait(?Send)]
impl<'a, T: Transport + ?Sized> Transport for &'a T {
    async fn get(&self, path: &str) -> TransportResult<TransportResponse> {
        (**self).get(path).await
    }
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn get(&self, path: &str) -> TransportResult<TransportResponse> {
        (**self).get(path).await
    }
}
