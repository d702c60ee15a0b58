//! `vitrine-client`
//!
//! **Responsibility:** shells around the product listing.
//!
//! This crate provides:
//! - The reqwest-backed catalog transport (native and browser)
//! - Environment configuration
//! - A terminal session that renders the listing as text
//! - A Leptos frontend (wasm32 only)
//!
//! All listing behavior lives in `vitrine-catalog`; this crate only wires it up.

pub mod config;
pub mod http;
pub mod render;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::{ClientConfig, ConfigError};
pub use http::HttpTransport;
pub use render::render_text;
pub use session::{SessionOptions, SessionOutcome, run_session};
