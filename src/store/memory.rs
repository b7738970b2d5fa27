use crate::core::item::Item;
use crate::core::store::ItemStore;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory item store. Contents live as long as the process.
#[derive(Clone, Default)]
pub struct MemoryItemStore {
    inner: Arc<Mutex<Vec<Item>>>,
}

impl MemoryItemStore {
    /// Creates an empty MemoryItemStore
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn store(&self, item: Item) -> Result<()> {
        let mut items = self.inner.lock().await;
        debug!("Memory STORE for id: {}", item.id());
        items.push(item);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Item>> {
        let items = self.inner.lock().await;
        debug!("Memory FIND_ALL returned {} items", items.len());
        Ok(items.clone())
    }
}
