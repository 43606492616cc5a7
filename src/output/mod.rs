//! Printers that turn stamped tokens into output lines.
//!
//! This module handles:
//! - JSON lines (the default)
//! - Tera templates, with color functions for delta gradients

pub mod json;
pub mod template;

// Re-export main types
pub use json::JsonPrinter;
pub use template::TemplatePrinter;

use crate::stream::Token;
use crate::utils::error::RenderError;
use crate::utils::settings::Settings;
use std::io::Write;

/// Renders one token to the output sink
///
/// Called exactly once per emitted token, in emission order.
pub trait Printer {
    fn print(&mut self, token: &Token) -> Result<(), RenderError>;
}

impl<P: Printer + ?Sized> Printer for &mut P {
    fn print(&mut self, token: &Token) -> Result<(), RenderError> {
        (**self).print(token)
    }
}

impl<P: Printer + ?Sized> Printer for Box<P> {
    fn print(&mut self, token: &Token) -> Result<(), RenderError> {
        (**self).print(token)
    }
}

/// Build the printer the settings ask for
///
/// **Public** - used by the run command
pub fn printer_for<'s, W: Write + 's>(settings: &'s Settings, out: W) -> Box<dyn Printer + 's> {
    match &settings.template {
        Some(template) => Box::new(TemplatePrinter::new(template, out)),
        None => Box::new(JsonPrinter::new(out)),
    }
}
