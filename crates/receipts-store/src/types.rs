use std::sync::Arc;

use async_trait::async_trait;
use receipts_core::{Receipt, ReceiptId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReceiptStoreError {
    #[error("no receipt found for id {0}")]
    NotFound(ReceiptId),
    #[error("identifier {0} is already in use")]
    DuplicateId(ReceiptId),
}

#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Store `receipt` verbatim under a freshly generated identifier.
    async fn submit(&self, receipt: Receipt) -> Result<ReceiptId, ReceiptStoreError>;

    async fn lookup(&self, id: &ReceiptId) -> Result<Arc<Receipt>, ReceiptStoreError>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
