//! Storage collaborator for catalog items.

use crate::core::item::Item;
use anyhow::Result;
use async_trait::async_trait;

/// Append-only item storage.
///
/// A completed `store` must be visible to the next `find_all` from the same
/// caller. `find_all` returns a full snapshot in no particular order.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn store(&self, item: Item) -> Result<()>;

    async fn find_all(&self) -> Result<Vec<Item>>;
}
