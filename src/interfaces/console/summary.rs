use crate::domain::order::LineItem;
use base64::{Engine, engine::general_purpose::STANDARD};

/// Prefix of the plain-text order summary.
const SUMMARY_PREFIX: &str = "Order details: ";

/// Plain-text order summary: the constant prefix followed by one
/// `name: quantity, ` entry per line item. The trailing separator is kept;
/// an empty order yields just the prefix.
pub fn summary_text(lines: &[LineItem]) -> String {
    let mut text = String::from(SUMMARY_PREFIX);
    for line in lines {
        text.push_str(&format!("{}: {}, ", line.name, line.quantity));
    }
    text
}

/// Standard padded base64 over the UTF-8 bytes of the summary text.
/// Decoding yields the summary byte-for-byte.
pub fn encode_summary(lines: &[LineItem]) -> String {
    STANDARD.encode(summary_text(lines))
}
