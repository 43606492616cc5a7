//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that terminate a record source
///
/// Always fatal: the run loop stops and the process exits non-zero.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while rendering a single record
///
/// Recoverable: logged, and the loop moves on to the next record.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by match-text extraction or condition evaluation
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// Errors in user-supplied configuration, detected before any input is read
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid regex {pattern:?}: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid template {name}: {source}")]
    InvalidTemplate {
        name: &'static str,
        #[source]
        source: tera::Error,
    },

    #[error("invalid time format: {0:?}")]
    InvalidTimeFormat(String),

    #[error("invalid duration: {0:?}")]
    InvalidDuration(String),

    #[error("invalid time zone: {0:?} (expected Local, UTC or an offset like +05:30)")]
    InvalidTimeZone(String),

    #[error("scale bounds must satisfy fast < slow (fast={fast}, slow={slow})")]
    InvalidScaleBounds { fast: String, slow: String },
}
