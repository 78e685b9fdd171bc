#![forbid(unsafe_code)]

//! Name tag request model (headless).
//!
//! This crate holds everything a badge generation consumes apart from the template itself:
//! the typed [`GenerationRequest`], the [`ColorTable`] that maps pronouns to background colors,
//! the arbitrary-precision [`Fingerprint`], and the caller-side [`RequestDraft`] validation that
//! turns loosely typed client input into a request. The SVG work lives in `nametag-render`.

pub mod color;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod request;

pub use color::{ColorTable, DEFAULT_COLOR, is_hex_color};
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use fingerprint::Fingerprint;
pub use request::{GenerationRequest, RequestDraft};

#[cfg(test)]
mod tests;
