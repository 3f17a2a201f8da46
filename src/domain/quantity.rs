use crate::error::Rejection;

/// An order quantity parsed from raw user input.
///
/// The accepted grammar is a non-empty run of ASCII digits after trimming,
/// so signs and decimal points are rejected while `"0"` parses to a valid
/// quantity of zero that downstream adds as a zero-subtotal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u64);

impl Quantity {
    pub fn parse(raw: &str) -> Result<Self, Rejection> {
        let digits = raw.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Rejection::InvalidQuantity);
        }
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| Rejection::InvalidQuantity)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}
