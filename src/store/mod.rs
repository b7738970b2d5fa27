pub mod disk;
pub mod memory;

use crate::config::{AppConfig, StorageBackend};
use crate::core::store::ItemStore;
use anyhow::Result;
use disk::DiskItemStore;
use memory::MemoryItemStore;
use std::sync::Arc;
use tracing::debug;

/// Opens the item store selected by `config`.
pub fn open_store(config: &AppConfig) -> Result<Arc<dyn ItemStore>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            debug!("Using in-memory item store");
            Ok(Arc::new(MemoryItemStore::new()))
        }
        StorageBackend::Disk => {
            let path = config.default_data_path()?.join("items");
            Ok(Arc::new(DiskItemStore::open(&path)?))
        }
    }
}
