//! Match rules deciding which records reset the stopwatch.
//!
//! Two independent rules, ANDed when both are configured:
//! - pattern: a regex searched (not full-matched) in the match text
//! - condition: a template rendered against the full record; it matches
//!   when the trimmed output is exactly `true`
//!
//! The match text is the extraction template's trimmed output when one is
//! configured, and the payload's raw text otherwise. Extraction and
//! condition errors are logged and count as a non-match.

use crate::stream::{Payload, Token};
use crate::template::{payload_context, token_context};
use crate::utils::error::MatchError;
use crate::utils::settings::Settings;
use log::warn;
use std::borrow::Cow;

/// Evaluates the configured match rules for each record
///
/// **Public** - used by the stream controller
pub struct Matcher<'s> {
    settings: &'s Settings,
}

impl<'s> Matcher<'s> {
    pub fn new(settings: &'s Settings) -> Self {
        Self { settings }
    }

    /// At least one rule is configured
    pub fn is_defined(&self) -> bool {
        self.settings.match_defined()
    }

    /// Text the pattern rule is tested against
    ///
    /// # Errors
    /// * `MatchError::Template` - the extraction template failed to render
    pub fn match_text<'p>(&self, payload: &'p Payload) -> Result<Cow<'p, str>, MatchError> {
        match &self.settings.match_template {
            Some(template) => {
                let rendered = template.render(&payload_context(payload))?;
                Ok(Cow::Owned(rendered.trim().to_string()))
            }
            None => Ok(Cow::Borrowed(payload.text())),
        }
    }

    /// Render the condition rule; only a trimmed `true` counts
    ///
    /// # Errors
    /// * `MatchError::Template` - the condition failed to render
    pub fn condition_holds(&self, token: &Token) -> Result<bool, MatchError> {
        match &self.settings.match_condition {
            Some(condition) => {
                let context = token_context(token)?;
                Ok(condition.render(&context)?.trim() == "true")
            }
            None => Ok(true),
        }
    }

    /// Whether `token` is an explicit match. Always false with no rules.
    pub fn matches(&self, token: &Token) -> bool {
        if !self.is_defined() {
            return false;
        }

        if let Some(pattern) = &self.settings.match_regex {
            let found = match self.match_text(&token.record.payload) {
                Ok(text) => pattern.is_match(&text),
                Err(e) => {
                    warn!("match template error on record {}: {}", token.record.index, e);
                    false
                }
            };
            if !found {
                return false;
            }
        }

        match self.condition_holds(token) {
            Ok(holds) => holds,
            Err(e) => {
                warn!("match condition error on record {}: {}", token.record.index, e);
                false
            }
        }
    }
}
