//! Record sources and the records they produce.
//!
//! This module handles:
//! - Reading newline-delimited lines
//! - Reading concatenated JSON values with their exact source text
//! - The stamped record type emitted downstream

pub mod json;
pub mod lines;
pub mod token;

// Re-export main types
pub use json::JsonStream;
pub use lines::LineStream;
pub use token::{Payload, Record, Token};

use crate::utils::error::StreamError;

/// A pull-based source of raw records
///
/// `scan` advances; `current` borrows the record just scanned. End of input
/// is not an error: `err` only reports what actually went wrong, and the
/// first such error is kept.
pub trait RecordSource {
    /// Advance to the next record. Returns false at end of input or on error.
    fn scan(&mut self) -> bool;

    /// The most recently scanned payload
    fn current(&self) -> &Payload;

    /// The error that terminated scanning, if any
    fn err(&self) -> Option<&StreamError>;

    /// Move the terminal error out of the source
    fn take_err(&mut self) -> Option<StreamError>;
}

impl<S: RecordSource + ?Sized> RecordSource for Box<S> {
    fn scan(&mut self) -> bool {
        (**self).scan()
    }

    fn current(&self) -> &Payload {
        (**self).current()
    }

    fn err(&self) -> Option<&StreamError> {
        (**self).err()
    }

    fn take_err(&mut self) -> Option<StreamError> {
        (**self).take_err()
    }
}
