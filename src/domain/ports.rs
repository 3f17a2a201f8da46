use super::order::LineItem;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Storage port for the single order aggregate of a session.
///
/// All three operations serialize on the same exclusive guard, so concurrent
/// callers never lose an update or observe a partially merged line.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Merges into an existing line with the same name, or appends a new
    /// line at the end, preserving first-seen order. Merged quantities
    /// saturate at the `u64` ceiling.
    async fn add_item(&self, item: LineItem) -> Result<()>;

    /// Sum of quantity × unit price over all current lines.
    async fn total(&self) -> Result<Decimal>;

    /// Read-only copy of the current lines, in insertion order.
    async fn snapshot(&self) -> Result<Vec<LineItem>>;
}

/// Cloneable handle shared between the session and its dispatched tasks.
pub type SharedOrderStore = Arc<dyn OrderStore>;
