//! The per-record control loop: stamp, match, buffer or emit, reset.
//!
//! With no match rule configured, every record resets the stopwatch and is
//! emitted immediately, so deltas are inter-record latencies. With a rule,
//! only matching records reset; with buffering on, every record is withheld
//! until the next match and then emitted with that match's settled delta.

pub mod buffer;

pub use buffer::TokenBuffer;

use crate::matcher::Matcher;
use crate::output::Printer;
use crate::stream::{Payload, Record, RecordSource, Token};
use crate::timing::{Clock, Stopwatch};
use crate::utils::error::StreamError;
use crate::utils::settings::Settings;
use chrono::TimeDelta;
use log::{debug, error};
use std::rc::Rc;

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records read from the source
    pub records: u64,

    /// Records successfully written
    pub emitted: u64,

    /// Explicit matches (zero when no rule is configured)
    pub matches: u64,

    /// Records whose output failed to render
    pub render_errors: u64,
}

/// Owns the stopwatch, the pending buffer and the output for one stream
pub struct Controller<'s, P: Printer, C: Clock> {
    settings: &'s Settings,
    matcher: Matcher<'s>,
    printer: P,
    clock: C,
    stopwatch: Option<Stopwatch>,
    buffer: TokenBuffer,
    start: Option<Rc<Record>>,
    last_delta: Option<TimeDelta>,
    summary: RunSummary,
}

impl<'s, P: Printer, C: Clock> Controller<'s, P, C> {
    pub fn new(settings: &'s Settings, printer: P, clock: C) -> Self {
        Self {
            settings,
            matcher: Matcher::new(settings),
            printer,
            clock,
            stopwatch: None,
            buffer: TokenBuffer::new(),
            start: None,
            last_delta: None,
            summary: RunSummary::default(),
        }
    }

    /// Drain `source`, then flush whatever is still pending
    ///
    /// The buffer is flushed even when the source stopped on an error, so
    /// nothing already read is lost.
    ///
    /// # Errors
    /// * `StreamError` - the source failed to read or decode its input
    pub fn run<S: RecordSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<RunSummary, StreamError> {
        while source.scan() {
            let payload = source.current().clone();
            self.process(payload);
        }
        self.finish();

        debug!(
            "stream ended: {} records, {} emitted, {} matches, {} render errors",
            self.summary.records,
            self.summary.emitted,
            self.summary.matches,
            self.summary.render_errors
        );

        match source.take_err() {
            Some(e) => Err(e),
            None => Ok(self.summary),
        }
    }

    /// Handle one record
    pub fn process(&mut self, payload: Payload) {
        // Step 1: stamp against the stopwatch as it stands before any reset
        let now = self.clock.now();
        let stopwatch = self.stopwatch.get_or_insert_with(|| Stopwatch::start(now));
        let lap = stopwatch.stamp(now);

        let time = self.settings.zone.localize(now);
        let mut token = Token {
            record: Record {
                index: self.summary.records,
                time_string: self.settings.time_format.format(&time),
                time,
                delta: lap.delta,
                total: lap.total,
                payload,
            },
            start: self.start.clone(),
        };
        self.summary.records += 1;
        self.last_delta = Some(lap.delta);

        // Step 2: decide
        let defined = self.matcher.is_defined();
        let matches = !defined || self.matcher.matches(&token);
        let reset = !defined || matches;
        let print_now = !defined || !self.settings.buffer;

        if print_now {
            emit(&mut self.printer, &mut self.summary, &token);
        }

        // Step 3: a match becomes the start reference and settles the buffer
        if matches {
            if defined {
                self.summary.matches += 1;
            }
            let snapshot = token.snapshot();
            token.start = Some(Rc::clone(&snapshot));
            self.start = Some(snapshot);

            if self.settings.buffer {
                let printer = &mut self.printer;
                let summary = &mut self.summary;
                self.buffer
                    .flush(token.record.delta, |pending| emit(printer, summary, pending));
            }
        }

        if !print_now {
            self.buffer.push(token);
        }

        if reset {
            stopwatch.reset(now);
        }
    }

    /// Emit anything still pending, backfilled from the last stamped record
    pub fn finish(&mut self) {
        let Some(delta) = self.last_delta else {
            return;
        };
        if !self.buffer.is_empty() {
            debug!("flushing {} pending records at end of stream", self.buffer.len());
        }
        let printer = &mut self.printer;
        let summary = &mut self.summary;
        self.buffer.flush(delta, |pending| emit(printer, summary, pending));
    }

    pub fn into_printer(self) -> P {
        self.printer
    }
}

/// **Private** - print one token, logging and counting render failures
fn emit<P: Printer>(printer: &mut P, summary: &mut RunSummary, token: &Token) {
    match printer.print(token) {
        Ok(()) => summary.emitted += 1,
        Err(e) => {
            error!("output error on record {}: {}", token.record.index, e);
            summary.render_errors += 1;
        }
    }
}
