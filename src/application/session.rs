use crate::domain::menu::Menu;
use crate::domain::order::LineItem;
use crate::domain::ports::SharedOrderStore;
use crate::domain::quantity::Quantity;
use crate::error::{Rejection, Result};
use crate::interfaces::console::prompt::Console;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Case-insensitive sentinel that ends the ordering phase.
pub const END_OF_ORDER: &str = "selesai";

/// Drives one interactive ordering session against an injected console.
///
/// Each accepted item's add-then-total pair is dispatched to a task and
/// joined before the next prompt is issued, so the loop stays observably
/// sequential: the printed running total always includes the item that was
/// just accepted.
pub struct OrderSession {
    menu: Menu,
    store: SharedOrderStore,
}

impl OrderSession {
    pub fn new(menu: Menu, store: SharedOrderStore) -> Self {
        Self { menu, store }
    }

    /// Runs the ordering loop until the sentinel or end of input. Rejected
    /// input is reported and the iteration discarded; only IO or task faults
    /// abort the session.
    pub async fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        info!("order session started");
        loop {
            let Some(name) = console.prompt_menu_name()? else {
                break;
            };
            if name.eq_ignore_ascii_case(END_OF_ORDER) {
                break;
            }
            let Some(entry) = self.menu.lookup(&name) else {
                warn!(input = %name, "unknown menu item");
                console.reject(Rejection::UnknownMenuItem)?;
                continue;
            };
            let Some(raw_quantity) = console.prompt_quantity()? else {
                break;
            };
            let quantity = match Quantity::parse(&raw_quantity) {
                Ok(quantity) => quantity,
                Err(rejection) => {
                    warn!(input = %raw_quantity, "malformed quantity");
                    console.reject(rejection)?;
                    continue;
                }
            };
            let running_total = self.place(LineItem::new(entry, quantity)).await?;
            console.running_total(running_total)?;
        }
        info!("order session finished");
        Ok(())
    }

    /// Dispatches the add-then-total pair for one accepted item and waits
    /// for it, returning the running total including that item.
    pub async fn place(&self, item: LineItem) -> Result<Decimal> {
        let store = Arc::clone(&self.store);
        let handle = tokio::spawn(async move {
            store.add_item(item).await?;
            store.total().await
        });
        let total = handle.await??;
        debug!(%total, "accumulated");
        Ok(total)
    }

    /// Read-only copy of the accumulated order for the report phase.
    pub async fn snapshot(&self) -> Result<Vec<LineItem>> {
        self.store.snapshot().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemoryOrderStore;
    use rust_decimal_macros::dec;

    fn session() -> OrderSession {
        OrderSession::new(Menu::standard(), Arc::new(InMemoryOrderStore::new()))
    }

    #[tokio::test]
    async fn test_place_returns_running_total_including_the_item() {
        let session = session();
        let menu = Menu::standard();

        let nasi = menu.lookup("nasi goreng").unwrap();
        let teh = menu.lookup("teh manis").unwrap();

        let total = session
            .place(LineItem::new(nasi, Quantity::parse("2").unwrap()))
            .await
            .unwrap();
        assert_eq!(total, dec!(40000));

        let total = session
            .place(LineItem::new(teh, Quantity::parse("1").unwrap()))
            .await
            .unwrap();
        assert_eq!(total, dec!(45000));

        let total = session
            .place(LineItem::new(nasi, Quantity::parse("3").unwrap()))
            .await
            .unwrap();
        assert_eq!(total, dec!(105000));

        let lines = session.snapshot().await.unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "nasi goreng");
        assert_eq!(lines[0].quantity, 5);
    }
}
