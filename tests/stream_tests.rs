use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::{self, BufRead, BufReader, Read};
use tj::stream::{JsonStream, LineStream, Payload, RecordSource};
use tj::utils::StreamError;

/// Reader that yields some bytes, then fails
struct FailingReader {
    data: &'static [u8],
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        }
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fn texts(source: &mut dyn RecordSource) -> Vec<String> {
    let mut out = Vec::new();
    while source.scan() {
        out.push(source.current().text().to_string());
    }
    out
}

fn boxed(read_json: bool, input: &'static str) -> Box<dyn RecordSource> {
    if read_json {
        Box::new(JsonStream::new(input.as_bytes()))
    } else {
        Box::new(LineStream::new(input.as_bytes()))
    }
}

#[test]
fn test_both_sources_share_one_contract() {
    let mut lines = boxed(false, "one\ntwo\r\nthree");
    assert_eq!(texts(&mut lines), vec!["one", "two", "three"]);
    assert!(lines.err().is_none());

    let mut values = boxed(true, "{\"n\": 1}\n{\"n\": 2}");
    assert_eq!(texts(&mut values), vec!["{\"n\": 1}", "{\"n\": 2}"]);
    assert!(values.err().is_none());
}

#[test]
fn test_empty_lines_are_records() {
    let mut lines = LineStream::new("a\n\nb\n".as_bytes());
    assert_eq!(texts(&mut lines), vec!["a", "", "b"]);
}

#[test]
fn test_value_payload_keeps_structure() {
    let mut values = JsonStream::new("[1, {\"k\": null}]".as_bytes());
    assert!(values.scan());
    assert_eq!(
        values.current(),
        &Payload::Value {
            value: json!([1, {"k": null}]),
            text: "[1, {\"k\": null}]".to_string(),
        }
    );
    assert!(!values.scan());
}

#[test]
fn test_read_error_is_kept_after_good_lines() {
    let reader = BufReader::new(FailingReader { data: b"ok\n" });
    let mut lines = LineStream::new(reader);

    assert_eq!(texts(&mut lines), vec!["ok"]);
    assert!(matches!(lines.err(), Some(StreamError::Io(_))));
    assert!(matches!(lines.take_err(), Some(StreamError::Io(_))));
    assert!(lines.err().is_none());
}

#[test]
fn test_json_read_error_surfaces() {
    let mut values = JsonStream::new(FailingReader { data: b"{\"a\": 1} " });
    assert!(values.scan());
    assert!(!values.scan());
    assert!(values.err().is_some());
}

#[test]
fn test_line_reader_accepts_any_bufread() {
    fn count<R: BufRead>(reader: R) -> usize {
        let mut lines = LineStream::new(reader);
        let mut n = 0;
        while lines.scan() {
            n += 1;
        }
        n
    }
    assert_eq!(count(io::Cursor::new(b"x\ny\nz\n".to_vec())), 3);
}
