//! Timing primitives: clocks, the stopwatch, and duration/time rendering.

pub mod clock;
pub mod duration;
pub mod format;
pub mod stopwatch;

// Re-export main types and functions
pub use clock::{Clock, ScriptedClock, SystemClock};
pub use duration::{format_duration, parse_duration};
pub use format::{TimeFormat, Zone};
pub use stopwatch::{Lap, Stopwatch};
