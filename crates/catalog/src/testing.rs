//! Test doubles shared by the unit tests of this crate.

use std::cell::RefCell;

use async_trait::async_trait;
use serde_json::{Value, json};

use vitrine_core::{Product, TransportError, TransportResult};

use crate::transport::{Transport, TransportResponse};

/// Transport that answers every read with a canned outcome and records paths.
pub(crate) struct FakeTransport {
    outcome: TransportResult<Value>,
    calls: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub(crate) fn serving(products: &[Product]) -> Self {
        Self::with_body(catalog_body(products))
    }

    pub(crate) fn with_body(body: Value) -> Self {
        Self {
            outcome: Ok(body),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn rejecting(err: TransportError) -> Self {
        Self {
            outcome: Err(err),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn get(&self, path: &str) -> TransportResult<TransportResponse> {
        self.calls.borrow_mut().push(path.to_string());
        self.outcome.clone().map(TransportResponse::new)
    }
}

pub(crate) fn catalog_body(products: &[Product]) -> Value {
    json!({ "products": products })
}

/// `n` products titled `Product 0..n`, each with an id and a price.
pub(crate) fn generated_products(n: usize) -> Vec<Product> {
    (0..n)
        .map(|i| {
            Product::new(format!("Product {i}"))
                .with_field("id", format!("product-{i}"))
                .with_field("price", format!("{}.00", 10 + i))
        })
        .collect()
}

/// The two watch overrides appended to a generated catalog.
pub(crate) fn watch_overrides() -> Vec<Product> {
    vec![
        Product::new("Best Watch Ever").with_field("id", "watch-1"),
        Product::new("Second Best Watch Ever").with_field("id", "watch-2"),
    ]
}

/// `n` generated products followed by `overrides`.
pub(crate) fn catalog_with(n: usize, overrides: &[Product]) -> Vec<Product> {
    let mut products = generated_products(n);
    products.extend_from_slice(overrides);
    products
}
