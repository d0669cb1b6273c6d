use super::price::{PriceFeed, PriceTable};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Shared handle to the latest price table.
///
/// A refresh builds a complete table first and then swaps it in, so readers
/// always see either the old or the new table.
#[derive(Clone, Default)]
pub struct PriceSnapshot {
    inner: Arc<RwLock<Arc<PriceTable>>>,
}

impl PriceSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> Arc<PriceTable> {
        let table = self.inner.read().await;
        Arc::clone(&*table)
    }

    pub async fn replace(&self, table: PriceTable) -> Arc<PriceTable> {
        let table = Arc::new(table);
        let mut current = self.inner.write().await;
        debug!("Replacing price snapshot with {} tokens", table.len());
        *current = Arc::clone(&table);
        table
    }

    /// Fetches the feed and replaces the snapshot. On error the previous table
    /// stays in place.
    pub async fn refresh(&self, feed: &(dyn PriceFeed + Send + Sync)) -> Result<Arc<PriceTable>> {
        let tokens = feed.fetch_prices().await?;
        Ok(self.replace(PriceTable::from(tokens)).await)
    }
}
