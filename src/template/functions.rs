//! Color functions available to output templates.
//!
//! - `color(nanos=deltaNanos)` - foreground escape for a delta
//! - `background(nanos=deltaNanos)` - background escape for a delta
//! - `reset()` - color reset escape

use crate::color::Palette;
use crate::utils::config::COLOR_RESET;
use std::collections::HashMap;
use std::sync::Arc;
use tera::{Tera, Value};

/// Register the color functions on a Tera instance
pub fn register(tera: &mut Tera, palette: Arc<Palette>) {
    let fg = Arc::clone(&palette);
    tera.register_function("color", move |args: &HashMap<String, Value>| {
        nanos_arg("color", args).map(|nanos| Value::String(fg.foreground(nanos)))
    });

    let bg = palette;
    tera.register_function("background", move |args: &HashMap<String, Value>| {
        nanos_arg("background", args).map(|nanos| Value::String(bg.background(nanos)))
    });

    tera.register_function("reset", |_: &HashMap<String, Value>| {
        Ok(Value::String(COLOR_RESET.to_string()))
    });
}

fn nanos_arg(function: &str, args: &HashMap<String, Value>) -> tera::Result<i64> {
    args.get("nanos").and_then(Value::as_i64).ok_or_else(|| {
        tera::Error::msg(format!("{}() expects an integer `nanos` argument", function))
    })
}
