use crate::utils::config::{
    DEFAULT_SCALE, DEFAULT_SCALE_FAST, DEFAULT_SCALE_SLOW, DEFAULT_TIME_FORMAT,
};
use clap::ValueEnum;

/// Arguments for the run command, as given on the command line
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Output template or predefined template name (None = JSON lines)
    pub template: Option<String>,

    /// strftime format or predefined format name
    pub time_format: String,

    /// `Local`, `UTC` or a fixed offset
    pub time_zone: String,

    /// Read concatenated JSON values instead of lines
    pub read_json: bool,

    /// Pattern rule
    pub match_regex: Option<String>,

    /// Match-text extraction template
    pub match_template: Option<String>,

    /// Extraction template that also switches the input to JSON values
    pub json_template: Option<String>,

    /// Condition rule template
    pub match_condition: Option<String>,

    /// Withhold records until the next match
    pub match_buffer: bool,

    /// Color stops or predefined scale name
    pub scale: String,

    pub scale_fast: String,
    pub scale_slow: String,

    pub scale_sqr: bool,
    pub scale_cube: bool,
    pub scale_sqrt: bool,
    pub scale_cubert: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            template: None,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            time_zone: "Local".to_string(),
            read_json: false,
            match_regex: None,
            match_template: None,
            json_template: None,
            match_condition: None,
            match_buffer: false,
            scale: DEFAULT_SCALE.to_string(),
            scale_fast: DEFAULT_SCALE_FAST.to_string(),
            scale_slow: DEFAULT_SCALE_SLOW.to_string(),
            scale_sqr: false,
            scale_cube: false,
            scale_sqrt: false,
            scale_cubert: false,
        }
    }
}

/// Predefined tables that `--list` can print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Templates,
    TimeFormats,
    Scales,
}
