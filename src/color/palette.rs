//! Delta-to-color mapping used by output templates.

use super::scale::{Rgb, Scale};
use super::terminal;
use chrono::TimeDelta;

/// A scale bound to the fast/slow delta range it spans
///
/// Deltas at or below `fast` map to the first stop, deltas at or above
/// `slow` map to the last one.
#[derive(Debug, Clone)]
pub struct Palette {
    scale: Scale,
    fast_nanos: i64,
    slow_nanos: i64,
}

impl Palette {
    pub fn new(scale: Scale, fast: TimeDelta, slow: TimeDelta) -> Self {
        Self {
            scale,
            fast_nanos: fast.num_nanoseconds().unwrap_or(i64::MAX),
            slow_nanos: slow.num_nanoseconds().unwrap_or(i64::MAX),
        }
    }

    /// Normalized position of a delta within [fast, slow], unclamped
    ///
    /// Computed in `f64`: bounds may sit anywhere in the `i64` range, so
    /// integer differences can overflow.
    pub fn position(&self, delta_nanos: i64) -> f64 {
        let fast = self.fast_nanos as f64;
        let span = self.slow_nanos as f64 - fast;
        (delta_nanos as f64 - fast) / span
    }

    pub fn color_of(&self, delta_nanos: i64) -> Rgb {
        self.scale.at(self.position(delta_nanos))
    }

    pub fn foreground(&self, delta_nanos: i64) -> String {
        terminal::foreground(self.color_of(delta_nanos))
    }

    pub fn background(&self, delta_nanos: i64) -> String {
        terminal::background(self.color_of(delta_nanos))
    }
}
