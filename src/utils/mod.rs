//! Utility modules for configuration and error handling.

pub mod config;
pub mod error;
pub mod settings;

// Re-export commonly used error types for convenience
pub use error::{ConfigError, MatchError, RenderError, StreamError};
pub use settings::Settings;
