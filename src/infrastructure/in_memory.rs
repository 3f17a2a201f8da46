use crate::domain::order::{self, LineItem};
use crate::domain::ports::OrderStore;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// The in-memory order aggregate for one session.
///
/// Uses `Arc<Mutex<Vec<LineItem>>>`: one coarse exclusive lock over the whole
/// line vector. The read-check-then-merge-or-append sequence, the total
/// computation, and snapshotting all run under that single guard, so
/// concurrent callers never lose an update or read a half-merged line. The
/// vector keeps lines in first-seen order for display.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    lines: Arc<Mutex<Vec<LineItem>>>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty order aggregate.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn add_item(&self, item: LineItem) -> Result<()> {
        let mut lines = self.lines.lock().await;
        if let Some(existing) = lines.iter_mut().find(|line| line.name == item.name) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            debug!(name = %existing.name, quantity = existing.quantity, "merged line item");
        } else {
            debug!(name = %item.name, quantity = item.quantity, "appended line item");
            lines.push(item);
        }
        Ok(())
    }

    async fn total(&self) -> Result<Decimal> {
        let lines = self.lines.lock().await;
        Ok(order::grand_total(&lines))
    }

    async fn snapshot(&self) -> Result<Vec<LineItem>> {
        let lines = self.lines.lock().await;
        Ok(lines.clone())
    }
}
