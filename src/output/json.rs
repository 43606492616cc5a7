//! JSON lines printer.
//!
//! Writes each token as one compact JSON object per line.

use super::Printer;
use crate::stream::Token;
use crate::utils::error::RenderError;
use std::io::Write;

/// Default printer when no template is configured
pub struct JsonPrinter<W: Write> {
    out: W,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Printer for JsonPrinter<W> {
    fn print(&mut self, token: &Token) -> Result<(), RenderError> {
        serde_json::to_writer(&mut self.out, token)?;
        self.out.write_all(b"\n")?;
        // Flush per record: downstream readers expect live output
        self.out.flush()?;
        Ok(())
    }
}
