//! Timestamped records and their external representation.
//!
//! A [`Record`] stores each duration once, as a `TimeDelta`. The seconds,
//! nanoseconds and string views are derived when the record is serialized,
//! so a backfilled delta can never disagree with its own views.

use crate::timing::duration::{format_duration, nanos, secs};
use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::rc::Rc;

/// What a record source produced
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// One input line, newline stripped
    Line(String),

    /// One decoded JSON value and the exact source text it came from
    Value { value: Value, text: String },
}

impl Payload {
    /// Raw line, or original source substring for JSON values
    pub fn text(&self) -> &str {
        match self {
            Self::Line(text) | Self::Value { text, .. } => text,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Line(_) => None,
            Self::Value { value, .. } => Some(value),
        }
    }
}

impl Default for Payload {
    fn default() -> Self {
        Self::Line(String::new())
    }
}

/// One stamped record
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Zero-based sequence index
    pub index: u64,

    /// Arrival time in the configured zone
    pub time: DateTime<FixedOffset>,

    /// `time` rendered with the configured format
    pub time_string: String,

    /// Elapsed since the last stopwatch reset
    pub delta: TimeDelta,

    /// Elapsed since the first record
    pub total: TimeDelta,

    pub payload: Payload,
}

impl Record {
    /// Overwrite the delta with a trigger's settled delta. The only
    /// mutation a record sees after it is stamped.
    pub fn backfill_delta(&mut self, delta: TimeDelta) {
        self.delta = delta;
    }

    fn view(&self) -> RecordView<'_> {
        RecordView {
            index: self.index,
            time: &self.time_string,
            time_secs: self.time.timestamp(),
            time_nanos: self.time.timestamp_nanos_opt().unwrap_or_default(),
            delta: format_duration(self.delta),
            delta_secs: secs(self.delta),
            delta_nanos: nanos(self.delta),
            total: format_duration(self.total),
            total_secs: secs(self.total),
            total_nanos: nanos(self.total),
            text: self.payload.text(),
            object: self.payload.value(),
            start: None,
        }
    }
}

/// A record plus a reference to the record that last reset the stopwatch
///
/// The start reference is a bare [`Record`], so it can never carry a start
/// of its own: nesting is one level deep by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub record: Record,
    pub start: Option<Rc<Record>>,
}

impl Token {
    pub fn new(record: Record) -> Self {
        Self {
            record,
            start: None,
        }
    }

    /// Snapshot of this token's record, suitable as a start reference
    pub fn snapshot(&self) -> Rc<Record> {
        Rc::new(self.record.clone())
    }

    fn view(&self) -> RecordView<'_> {
        RecordView {
            start: self.start.as_deref().map(|start| Box::new(start.view())),
            ..self.record.view()
        }
    }
}

/// Serialized form of a record (JSON output and template context)
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordView<'a> {
    index: u64,
    time: &'a str,
    time_secs: i64,
    time_nanos: i64,
    delta: String,
    delta_secs: f64,
    delta_nanos: i64,
    total: String,
    total_secs: f64,
    total_nanos: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    object: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<Box<RecordView<'a>>>,
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view().serialize(serializer)
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn record(index: u64, delta_ms: i64, payload: Payload) -> Record {
        let time = FixedOffset::east_opt(0)
            .unwrap()
            .timestamp_opt(1_700_000_000, 500_000_000)
            .unwrap();
        Record {
            index,
            time,
            time_string: "T".to_string(),
            delta: TimeDelta::milliseconds(delta_ms),
            total: TimeDelta::milliseconds(delta_ms * 2),
            payload,
        }
    }

    #[test]
    fn test_line_record_serialization() {
        let token = Token::new(record(3, 1_500, Payload::Line("hello".to_string())));
        let value = serde_json::to_value(&token).unwrap();

        assert_eq!(
            value,
            json!({
                "index": 3,
                "time": "T",
                "timeSecs": 1_700_000_000_i64,
                "timeNanos": 1_700_000_000_500_000_000_i64,
                "delta": "1.5s",
                "deltaSecs": 1.5,
                "deltaNanos": 1_500_000_000_i64,
                "total": "3s",
                "totalSecs": 3.0,
                "totalNanos": 3_000_000_000_i64,
                "text": "hello",
            })
        );
    }

    #[test]
    fn test_value_record_carries_object_and_source_text() {
        let payload = Payload::Value {
            value: json!({"a": 1}),
            text: "{\"a\": 1}".to_string(),
        };
        let value = serde_json::to_value(Token::new(record(0, 0, payload))).unwrap();

        assert_eq!(value["object"], json!({"a": 1}));
        assert_eq!(value["text"], json!("{\"a\": 1}"));
    }

    #[test]
    fn test_start_is_one_level_deep() {
        let first = Token::new(record(0, 0, Payload::Line("START".to_string())));
        let mut second = Token::new(record(1, 10, Payload::Line("next".to_string())));
        second.start = Some(first.snapshot());

        let mut third = Token::new(record(2, 20, Payload::Line("later".to_string())));
        third.start = Some(second.snapshot());

        let value = serde_json::to_value(&third).unwrap();
        assert_eq!(value["start"]["text"], json!("next"));
        assert!(value["start"].get("start").is_none());
    }

    #[test]
    fn test_backfill_leaves_other_fields() {
        let mut buffered = record(0, 10, Payload::Line("x".to_string()));
        let trigger = record(1, 900, Payload::Line("START".to_string()));
        buffered.backfill_delta(trigger.delta);

        assert_eq!(buffered.delta, TimeDelta::milliseconds(900));
        assert_eq!(buffered.total, TimeDelta::milliseconds(20));
        assert_eq!(buffered.payload.text(), "x");
    }
}
