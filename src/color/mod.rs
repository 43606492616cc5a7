//! Color scales for rendering delta magnitude as a terminal gradient.
//!
//! This module handles:
//! - Parsing hex color stop lists into scales
//! - Piecewise-linear interpolation with optional power curves
//! - Quantizing colors to 256-color terminal escapes

pub mod palette;
pub mod scale;
pub mod terminal;

// Re-export main types
pub use palette::Palette;
pub use scale::{parse_stops, Curve, Rgb, Scale};
pub use terminal::{background, cube_index, foreground};
