//! Domain types for the ordering session: the static menu catalog, validated
//! quantities, line items, and the aggregate storage port.

pub mod menu;
pub mod order;
pub mod ports;
pub mod quantity;
