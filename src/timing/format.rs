//! Rendering arrival timestamps: time zone and strftime pattern.

use crate::utils::error::ConfigError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

/// Time zone used for the `time` string view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// The system zone, re-evaluated per timestamp so DST changes apply
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    /// Parse `Local`, `UTC` or an offset such as `+05:30`
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "Local" | "local" => Ok(Self::Local),
            "UTC" | "utc" | "Z" => Ok(Self::Fixed(Utc.fix())),
            other => other
                .parse::<FixedOffset>()
                .map(Self::Fixed)
                .map_err(|_| ConfigError::InvalidTimeZone(value.to_string())),
        }
    }

    pub fn localize(&self, at: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Self::Local => at.with_timezone(&Local).fixed_offset(),
            Self::Fixed(offset) => at.with_timezone(offset),
        }
    }
}

/// A validated strftime pattern
///
/// chrono panics when displaying a pattern with invalid specifiers, so
/// patterns are checked once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat {
    pattern: String,
}

impl TimeFormat {
    pub fn new(pattern: impl Into<String>) -> Result<Self, ConfigError> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidTimeFormat(pattern));
        }
        Ok(Self { pattern })
    }

    /// `2006-01-02T15:04:05+07:00` style, the default
    pub fn rfc3339() -> Self {
        Self {
            pattern: "%Y-%m-%dT%H:%M:%S%:z".to_string(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, at: &DateTime<FixedOffset>) -> String {
        at.format(&self.pattern).to_string()
    }
}
