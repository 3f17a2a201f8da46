use rust_decimal::Decimal;

use super::menu::MenuEntry;
use super::quantity::Quantity;

/// One aggregated entry of an order: a menu name, its unit price, and the
/// cumulative quantity ordered under that name.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u64,
}

impl LineItem {
    /// Builds a line item from a validated menu entry and quantity. The name
    /// is the entry's canonical lowercase key, so merges stay exact.
    pub fn new(entry: &MenuEntry, quantity: Quantity) -> Self {
        Self {
            name: entry.name.clone(),
            unit_price: entry.unit_price,
            quantity: quantity.value(),
        }
    }

    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Sum of subtotals over a set of lines.
pub fn grand_total(lines: &[LineItem]) -> Decimal {
    lines.iter().map(LineItem::subtotal).sum()
}
