use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use receipts_core::{Receipt, ReceiptId};
use tokio::sync::RwLock;

use crate::id::{IdGenerator, UuidIdGenerator};
use crate::types::{ReceiptStore, ReceiptStoreError};

pub struct InMemoryReceiptStore {
    ids: Arc<dyn IdGenerator>,
    map: RwLock<HashMap<ReceiptId, Arc<Receipt>>>,
}

impl InMemoryReceiptStore {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            map: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryReceiptStore {
    fn default() -> Self {
        Self::new(Arc::new(UuidIdGenerator))
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn submit(&self, receipt: Receipt) -> Result<ReceiptId, ReceiptStoreError> {
        let id = self.ids.generate();
        match self.map.write().await.entry(id.clone()) {
            Entry::Occupied(_) => {
                tracing::error!(id = %id, "id generator returned an identifier already in use");
                Err(ReceiptStoreError::DuplicateId(id))
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(receipt));
                Ok(id)
            }
        }
    }

    async fn lookup(&self, id: &ReceiptId) -> Result<Arc<Receipt>, ReceiptStoreError> {
        self.map
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| ReceiptStoreError::NotFound(id.clone()))
    }

    async fn len(&self) -> usize {
        self.map.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIdGenerator;
    use pretty_assertions::assert_eq;
    use receipts_core::Item;

    fn receipt(retailer: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![Item::new("Gatorade", "2.25"), Item::new("Gatorade", "2.25")],
            total: "4.50".to_string(),
        }
    }

    struct FixedIdGenerator;

    impl IdGenerator for FixedIdGenerator {
        fn generate(&self) -> ReceiptId {
            ReceiptId::new("same")
        }
    }

    #[tokio::test]
    async fn lookup_returns_what_was_submitted() {
        let store = InMemoryReceiptStore::default();
        let r = receipt("M&M Corner Market");

        let id = store.submit(r.clone()).await.unwrap();
        let got = store.lookup(&id).await.unwrap();
        assert_eq!(*got, r);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn submit_stores_input_verbatim() {
        let store = InMemoryReceiptStore::default();
        let r = Receipt {
            retailer: String::new(),
            purchase_date: "not a date".to_string(),
            purchase_time: String::new(),
            items: Vec::new(),
            total: "abc".to_string(),
        };

        let id = store.submit(r.clone()).await.unwrap();
        assert_eq!(*store.lookup(&id).await.unwrap(), r);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = InMemoryReceiptStore::default();
        assert!(store.is_empty().await);

        let id = ReceiptId::new("does-not-exist");
        assert_eq!(
            store.lookup(&id).await.unwrap_err(),
            ReceiptStoreError::NotFound(id)
        );
    }

    #[tokio::test]
    async fn ids_from_another_store_do_not_resolve() {
        let first = InMemoryReceiptStore::default();
        let second = InMemoryReceiptStore::default();

        let id = first.submit(receipt("Target")).await.unwrap();
        assert!(matches!(
            second.lookup(&id).await,
            Err(ReceiptStoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn injected_generator_controls_ids() {
        let store = InMemoryReceiptStore::new(Arc::new(SequentialIdGenerator::new("r")));

        assert_eq!(store.submit(receipt("a")).await.unwrap().as_str(), "r-1");
        assert_eq!(store.submit(receipt("b")).await.unwrap().as_str(), "r-2");
        assert_eq!(
            store.lookup(&ReceiptId::new("r-2")).await.unwrap().retailer,
            "b"
        );
    }

    #[tokio::test]
    async fn duplicate_id_fails_without_overwriting() {
        let store = InMemoryReceiptStore::new(Arc::new(FixedIdGenerator));

        let id = store.submit(receipt("first")).await.unwrap();
        assert_eq!(
            store.submit(receipt("second")).await.unwrap_err(),
            ReceiptStoreError::DuplicateId(id.clone())
        );
        assert_eq!(store.lookup(&id).await.unwrap().retailer, "first");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn concurrent_submissions_all_land() {
        let store = Arc::new(InMemoryReceiptStore::default());

        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.submit(receipt(&format!("shop {i}"))).await.unwrap()
            }));
        }

        let mut ids = Vec::new();
        for h in handles {
            ids.push(h.await.unwrap());
        }

        assert_eq!(store.len().await, 32);
        for id in &ids {
            assert!(store.lookup(id).await.is_ok());
        }
    }
}
