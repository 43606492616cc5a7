//! Validated, immutable run settings.
//!
//! Built once at startup from CLI args (see `commands::run::validate_args`)
//! and passed by reference to every component.

use crate::color::{Palette, Scale};
use crate::template::Template;
use crate::timing::{TimeFormat, Zone};
use chrono::TimeDelta;
use regex::Regex;
use std::sync::Arc;

use super::config::{COLOR_SCALES, DEFAULT_SCALE};

#[derive(Debug, Clone)]
pub struct Settings {
    /// Output template; `None` writes JSON lines
    pub template: Option<Template>,

    pub time_format: TimeFormat,

    pub zone: Zone,

    /// Decode JSON values instead of lines
    pub read_json: bool,

    /// Pattern rule, tested against the match text
    pub match_regex: Option<Regex>,

    /// Extracts the match text from a payload
    pub match_template: Option<Template>,

    /// Condition rule, must render to `true`
    pub match_condition: Option<Template>,

    /// Hold records until the next match, then backfill their delta
    pub buffer: bool,

    pub palette: Arc<Palette>,
}

impl Settings {
    /// Whether any rule that can trigger a stopwatch reset is configured
    pub fn match_defined(&self) -> bool {
        self.match_regex.is_some() || self.match_condition.is_some()
    }
}

impl Default for Settings {
    fn default() -> Self {
        let scale = Scale::parse(super::config::resolve(COLOR_SCALES, DEFAULT_SCALE));
        Self {
            template: None,
            time_format: TimeFormat::rfc3339(),
            zone: Zone::Local,
            read_json: false,
            match_regex: None,
            match_template: None,
            match_condition: None,
            buffer: false,
            palette: Arc::new(Palette::new(
                scale,
                TimeDelta::milliseconds(100),
                TimeDelta::seconds(2),
            )),
        }
    }
}
