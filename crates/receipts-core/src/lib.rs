//! Core types shared across the receipts workspace.
//!
//! This crate stays free of runtime dependencies so the store, the scoring
//! engine, and the HTTP service can all agree on one receipt shape.

pub mod types;

pub use types::*;
