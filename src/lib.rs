//! tj
//!
//! Stamps each line (or JSON value) read from an input stream with its
//! arrival time, the time since the previous stopwatch reset (delta), and
//! the time since the first record (total).
//!
//! This crate provides the core implementation for the `tj` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install tj
//! long-running-job | tj --template TimeDelta
//! ```
//!
//! ## Library layout
//!
//! - [`stream`]: record sources (lines, JSON values) and the stamped record type
//! - [`timing`]: clocks, the stopwatch, duration and time formatting
//! - [`matcher`]: pattern and condition rules that reset the stopwatch
//! - [`controller`]: the per-record state machine, including buffering
//! - [`output`]: JSON-lines and template printers
//! - [`color`]: color scales mapping a delta onto a terminal gradient
//! - [`template`]: Tera templates and the color functions they can call

pub mod color;
pub mod commands;
pub mod controller;
pub mod matcher;
pub mod output;
pub mod stream;
pub mod template;
pub mod timing;
pub mod utils;
