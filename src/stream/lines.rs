//! Line-oriented record source.

use super::token::Payload;
use super::RecordSource;
use crate::utils::error::StreamError;
use std::io::BufRead;

/// Yields one record per newline-terminated line
///
/// The trailing `\n` (and a preceding `\r`) is stripped. Invalid UTF-8 is
/// replaced rather than treated as an error.
pub struct LineStream<R> {
    reader: R,
    buf: Vec<u8>,
    current: Payload,
    err: Option<StreamError>,
    done: bool,
}

impl<R: BufRead> LineStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            current: Payload::default(),
            err: None,
            done: false,
        }
    }
}

impl<R: BufRead> RecordSource for LineStream<R> {
    fn scan(&mut self) -> bool {
        if self.done {
            return false;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                false
            }
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                self.current = Payload::Line(String::from_utf8_lossy(&self.buf).into_owned());
                true
            }
            Err(e) => {
                self.err = Some(StreamError::Io(e));
                self.done = true;
                false
            }
        }
    }

    fn current(&self) -> &Payload {
        &self.current
    }

    fn err(&self) -> Option<&StreamError> {
        self.err.as_ref()
    }

    fn take_err(&mut self) -> Option<StreamError> {
        self.err.take()
    }
}
