//! Tera templates for output rendering, match-text extraction and conditions.

pub mod functions;

use crate::color::Palette;
use crate::stream::{Payload, Token};
use crate::utils::error::ConfigError;
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;
use tera::{Context, Tera};

/// Template names, used in error messages
pub const OUTPUT_TEMPLATE: &str = "template";
pub const MATCH_TEMPLATE: &str = "match-template";
pub const MATCH_CONDITION: &str = "match-condition";

/// A single compiled template
#[derive(Debug, Clone)]
pub struct Template {
    tera: Tera,
    name: &'static str,
}

impl Template {
    /// Compile a template without the color functions
    ///
    /// # Errors
    /// * `ConfigError::InvalidTemplate` - the source does not parse
    pub fn compile(name: &'static str, source: &str) -> Result<Self, ConfigError> {
        Self::build(name, source, None)
    }

    /// Compile a template with `color`, `background` and `reset` available
    pub fn with_palette(
        name: &'static str,
        source: &str,
        palette: Arc<Palette>,
    ) -> Result<Self, ConfigError> {
        Self::build(name, source, Some(palette))
    }

    fn build(
        name: &'static str,
        source: &str,
        palette: Option<Arc<Palette>>,
    ) -> Result<Self, ConfigError> {
        let mut tera = Tera::default();
        if let Some(palette) = palette {
            functions::register(&mut tera, palette);
        }
        tera.add_raw_template(name, source)
            .map_err(|source| ConfigError::InvalidTemplate { name, source })?;
        Ok(Self { tera, name })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn render(&self, context: &Context) -> tera::Result<String> {
        self.tera.render(self.name, context)
    }

    /// Render straight into a writer; on failure, whatever was produced
    /// before the error has already been written.
    pub fn render_to(&self, context: &Context, out: impl Write) -> tera::Result<()> {
        self.tera.render_to(self.name, context, out)
    }
}

/// Context exposing a full token: the same fields as the JSON output
pub fn token_context(token: &Token) -> tera::Result<Context> {
    Context::from_serialize(token)
}

/// Context exposing only a payload: `text`, `value`, and the top-level
/// fields of a JSON object value
pub fn payload_context(payload: &Payload) -> Context {
    let mut context = Context::new();
    context.insert("text", payload.text());
    context.insert("value", payload.value().unwrap_or(&Value::Null));
    if let Some(Value::Object(fields)) = payload.value() {
        for (key, value) in fields {
            context.insert(key.as_str(), value);
        }
    }
    context
}
