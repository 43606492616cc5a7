//! JSON value record source.
//!
//! Decodes a stream of concatenated JSON values and keeps, for each one,
//! the exact source text it was decoded from. Every byte the decoder pulls
//! from the input is also copied into a side buffer; after each value the
//! decoder's byte offset says how much of that buffer belongs to it. Bytes
//! the decoder has peeked past the value stay in the buffer for the next one.

use super::token::Payload;
use super::RecordSource;
use crate::utils::error::StreamError;
use log::debug;
use serde_json::de::IoRead;
use serde_json::{StreamDeserializer, Value};
use std::cell::RefCell;
use std::io::{self, Read};
use std::rc::Rc;

/// Reader adapter that records every byte read through it
struct TeeReader<R> {
    inner: R,
    seen: Rc<RefCell<Vec<u8>>>,
}

impl<R: Read> Read for TeeReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.seen.borrow_mut().extend_from_slice(&buf[..n]);
        Ok(n)
    }
}

/// Yields one record per syntactically complete JSON value
///
/// Wrap unbuffered readers (such as stdin) in a `BufReader`: the decoder
/// reads one byte at a time.
pub struct JsonStream<R: Read> {
    values: StreamDeserializer<'static, IoRead<TeeReader<R>>, Value>,
    seen: Rc<RefCell<Vec<u8>>>,
    /// Decoder offset up to which `seen` has been drained
    consumed: usize,
    current: Payload,
    err: Option<StreamError>,
    done: bool,
}

impl<R: Read> JsonStream<R> {
    pub fn new(reader: R) -> Self {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let tee = TeeReader {
            inner: reader,
            seen: Rc::clone(&seen),
        };
        Self {
            values: serde_json::Deserializer::from_reader(tee).into_iter::<Value>(),
            seen,
            consumed: 0,
            current: Payload::Value {
                value: Value::Null,
                text: String::new(),
            },
            err: None,
            done: false,
        }
    }

    /// Remove and return the source text of the value that just ended
    fn take_source_text(&mut self) -> String {
        let offset = self.values.byte_offset();
        let mut seen = self.seen.borrow_mut();
        let len = offset.saturating_sub(self.consumed).min(seen.len());
        let bytes: Vec<u8> = seen.drain(..len).collect();
        self.consumed = offset;
        String::from_utf8_lossy(&bytes).trim().to_string()
    }
}

impl<R: Read> RecordSource for JsonStream<R> {
    fn scan(&mut self) -> bool {
        if self.done {
            return false;
        }

        match self.values.next() {
            Some(Ok(value)) => {
                let text = self.take_source_text();
                self.current = Payload::Value { value, text };
                true
            }
            Some(Err(e)) => {
                debug!("JSON stream stopped at byte {}: {}", self.values.byte_offset(), e);
                // First error wins; later scans never reach here
                if self.err.is_none() {
                    self.err = Some(StreamError::Json(e));
                }
                self.done = true;
                false
            }
            None => {
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
