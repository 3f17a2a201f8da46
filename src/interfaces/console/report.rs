use super::summary;
use crate::application::processing::ProcessingResult;
use crate::domain::order::{self, LineItem};
use crate::error::Result;
use std::io::Write;

/// Writes the post-session output: itemized receipt, encoded order summary,
/// processing status lines, and the farewell.
pub struct ReportWriter<W> {
    output: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    /// Itemized receipt: one line per item plus the grand total, prices with
    /// two decimals.
    pub fn write_receipt(&mut self, lines: &[LineItem]) -> Result<()> {
        writeln!(self.output, "\n--- Your Order ---")?;
        for line in lines {
            writeln!(
                self.output,
                "Menu: {}, Qty: {}, Unit price: {:.2}, Subtotal: {:.2}",
                line.name,
                line.quantity,
                line.unit_price,
                line.subtotal()
            )?;
        }
        writeln!(self.output, "Total: {:.2}", order::grand_total(lines))?;
        Ok(())
    }

    pub fn write_encoded_summary(&mut self, lines: &[LineItem]) -> Result<()> {
        writeln!(
            self.output,
            "\nEncoded order summary (base64): {}",
            summary::encode_summary(lines)
        )?;
        Ok(())
    }

    pub fn write_status(&mut self, result: &ProcessingResult) -> Result<()> {
        writeln!(self.output, "{result}")?;
        Ok(())
    }

    pub fn write_farewell(&mut self) -> Result<()> {
        writeln!(self.output, "Program finished")?;
        Ok(())
    }
}
