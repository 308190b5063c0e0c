//! HTTP surface for the receipt processor.
//!
//! `POST /receipts/process` stores a receipt and returns its id;
//! `GET /receipts/{id}/points` scores a stored receipt.

pub mod error;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
