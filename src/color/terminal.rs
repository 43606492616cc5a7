//! 256-color terminal escape sequences.
//!
//! Colors are quantized onto the 6×6×6 cube that starts at palette index 16.
//! The bucketing is per channel and lossy; it is not a perceptual nearest match.

use super::scale::Rgb;

/// Palette index of the cube cell containing `color`
pub fn cube_index(color: Rgb) -> u8 {
    let level = |c: u8| u16::from(c) * 5 / 255;
    (36 * level(color.r) + 6 * level(color.g) + level(color.b) + 16) as u8
}

/// Foreground escape sequence for the closest cube color
pub fn foreground(color: Rgb) -> String {
    format!("\x1b[38;5;{}m", cube_index(color))
}

/// Background escape sequence for the closest cube color
pub fn background(color: Rgb) -> String {
    format!("\x1b[48;5;{}m", cube_index(color))
}
