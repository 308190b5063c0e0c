use std::sync::Arc;

use receipts_store::{IdGenerator, InMemoryReceiptStore, ReceiptStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryReceiptStore::default()))
    }

    pub fn in_memory_with_ids(ids: Arc<dyn IdGenerator>) -> Self {
        Self::new(Arc::new(InMemoryReceiptStore::new(ids)))
    }
}
