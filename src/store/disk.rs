use crate::core::item::Item;
use crate::core::store::ItemStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

const ITEMS_PARTITION: &str = "items";

/// Durable item store on a fjall keyspace.
///
/// Items are keyed by their big-endian id so iteration follows id order, and
/// stored as JSON.
pub struct DiskItemStore {
    keyspace: Keyspace,
    items: PartitionHandle,
}

impl DiskItemStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create data directory: {}", path.display()))?;

        let keyspace = Config::new(path)
            .open()
            .with_context(|| format!("Failed to open item store at {}", path.display()))?;
        let items = keyspace
            .open_partition(ITEMS_PARTITION, PartitionCreateOptions::default())
            .context("Failed to open items partition")?;
        debug!("Opened item store at {}", path.display());

        Ok(Self { keyspace, items })
    }
}

#[async_trait]
impl ItemStore for DiskItemStore {
    async fn store(&self, item: Item) -> Result<()> {
        let value = serde_json::to_vec(&item)?;
        self.items
            .insert(item.id().to_be_bytes().to_vec(), value)
            .with_context(|| format!("Failed to write item {}", item.id()))?;
        self.keyspace
            .persist(PersistMode::SyncAll)
            .context("Failed to persist item store")?;
        debug!("Disk STORE for id: {}", item.id());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        for entry in self.items.iter() {
            let (key, value) = entry.context("Failed to read item store")?;
            let item: Item = serde_json::from_slice(&value)
                .with_context(|| format!("Corrupt item record under key {key:?}"))?;
            items.push(item);
        }
        debug!("Disk FIND_ALL returned {} items", items.len());
        Ok(items)
    }
}
