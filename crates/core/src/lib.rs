//! `vitrine-core` — catalog building blocks shared by every layer.
//!
//! This crate contains the product record and the error model (no IO).

pub mod error;
pub mod product;

pub use error::{FetchFailure, TransportError, TransportResult};
pub use product::{Product, ProductKey};
