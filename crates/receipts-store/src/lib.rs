//! Receipt storage: hands out identifiers and resolves them back to receipts.
//!
//! Records are write-once. Nothing is persisted; a restart starts from an empty
//! store, so identifiers from a previous process resolve to `NotFound`.

mod id;
mod memory_store;
mod types;

pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use memory_store::InMemoryReceiptStore;
pub use types::{ReceiptStore, ReceiptStoreError};
