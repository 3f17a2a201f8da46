use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A single entry of the restaurant's menu.
///
/// Names are stored lowercase and act as the unique key for lookups and for
/// line-item merging.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub name: String,
    pub unit_price: Decimal,
}

impl MenuEntry {
    fn new(name: &str, unit_price: Decimal) -> Self {
        Self {
            name: name.to_string(),
            unit_price,
        }
    }
}

/// The fixed menu, built once at startup and injected read-only into the
/// components that need lookups.
#[derive(Debug, Clone)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    /// The standard five-item menu.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                MenuEntry::new("nasi goreng", dec!(20000)),
                MenuEntry::new("mie goreng", dec!(15000)),
                MenuEntry::new("ayam bakar", dec!(25000)),
                MenuEntry::new("teh manis", dec!(5000)),
                MenuEntry::new("jus jeruk", dec!(10000)),
            ],
        }
    }

    /// Case-insensitive, whitespace-trimming exact match. Unknown names and
    /// the empty string return `None`.
    pub fn lookup(&self, name: &str) -> Option<&MenuEntry> {
        let needle = name.trim().to_lowercase();
        self.entries.iter().find(|entry| entry.name == needle)
    }

    /// Entries in fixed menu order, for the welcome banner.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }
}
