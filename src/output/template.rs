//! Template printer.

use super::Printer;
use crate::stream::Token;
use crate::template::{token_context, Template};
use crate::utils::error::RenderError;
use std::io::Write;

/// Renders each token through an output template, one line per token
///
/// A newline is written even when rendering fails, so a bad record never
/// merges into the next one's line.
pub struct TemplatePrinter<'t, W: Write> {
    template: &'t Template,
    out: W,
}

impl<'t, W: Write> TemplatePrinter<'t, W> {
    pub fn new(template: &'t Template, out: W) -> Self {
        Self { template, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Printer for TemplatePrinter<'_, W> {
    fn print(&mut self, token: &Token) -> Result<(), RenderError> {
        let rendered = token_context(token)
            .and_then(|context| self.template.render_to(&context, &mut self.out));
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        rendered?;
        Ok(())
    }
}
