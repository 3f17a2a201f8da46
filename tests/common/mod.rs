use rust_decimal::Decimal;
use std::sync::Arc;
use warung::domain::order::LineItem;
use warung::domain::ports::SharedOrderStore;
use warung::infrastructure::in_memory::InMemoryOrderStore;

/// Joins prompt replies into the newline-terminated script a session reads.
#[allow(dead_code)]
pub fn script(replies: &[&str]) -> String {
    let mut joined = replies.join("\n");
    joined.push('\n');
    joined
}

#[allow(dead_code)]
pub fn shared_store() -> SharedOrderStore {
    Arc::new(InMemoryOrderStore::new())
}

#[allow(dead_code)]
pub fn line(name: &str, unit_price: Decimal, quantity: u64) -> LineItem {
    LineItem {
        name: name.to_string(),
        unit_price,
        quantity,
    }
}
