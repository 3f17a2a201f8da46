use crate::domain::menu::Menu;
use crate::error::{Rejection, Result};
use rust_decimal::Decimal;
use std::io::{BufRead, ErrorKind, Write};

/// Interactive console for the ordering phase.
///
/// Generic over its input and output (e.g. stdin/stdout, or byte buffers in
/// tests), like the rest of the I/O adapters.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Welcome banner: title plus every menu entry with a title-cased name
    /// and a two-decimal price.
    pub fn banner(&mut self, menu: &Menu) -> Result<()> {
        writeln!(self.output, "Welcome to the Simple Restaurant!")?;
        writeln!(self.output, "Available menu:")?;
        for entry in menu.entries() {
            writeln!(
                self.output,
                "- {}: {:.2}",
                title_case(&entry.name),
                entry.unit_price
            )?;
        }
        Ok(())
    }

    /// Prompts for a menu name and reads one reply. `None` at end of input.
    pub fn prompt_menu_name(&mut self) -> Result<Option<String>> {
        write!(
            self.output,
            "\nEnter menu name (type 'selesai' to finish the order): "
        )?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompts for an order quantity and reads one reply.
    pub fn prompt_quantity(&mut self) -> Result<Option<String>> {
        write!(self.output, "Enter order quantity: ")?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn reject(&mut self, rejection: Rejection) -> Result<()> {
        writeln!(self.output, "{rejection}")?;
        Ok(())
    }

    pub fn running_total(&mut self, total: Decimal) -> Result<()> {
        writeln!(self.output, "Running total: {total:.2}")?;
        Ok(())
    }

    /// Consumes the console, handing back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// One trimmed line of input. A line that is not valid UTF-8 degrades to
    /// the empty string so validation rejects it instead of the session
    /// aborting.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim().to_string())),
            Err(e) if e.kind() == ErrorKind::InvalidData => Ok(Some(String::new())),
            Err(e) => Err(e.into()),
        }
    }
}

/// Uppercases the first letter of each word, for the banner.
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
