//! Duration text in the compact `1h2m3.5s` notation.
//!
//! Formatting is used for the string view of deltas and totals; parsing is
//! used for the `--scale-fast`/`--scale-slow` flags.

use crate::utils::error::ConfigError;
use chrono::TimeDelta;
use std::fmt::Write;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Whole nanoseconds in `delta`, saturating at the i64 range
pub fn nanos(delta: TimeDelta) -> i64 {
    delta.num_nanoseconds().unwrap_or(if delta < TimeDelta::zero() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Seconds in `delta` as a float
pub fn secs(delta: TimeDelta) -> f64 {
    nanos(delta) as f64 / NANOS_PER_SECOND as f64
}

/// Format a duration, e.g. `0s`, `750µs`, `1.5s`, `1m30s`, `2h0m0s`
///
/// Sub-second values use the largest unit below one second that keeps the
/// integer part non-zero; longer values are split into hours, minutes and
/// fractional seconds.
pub fn format_duration(delta: TimeDelta) -> String {
    let value = nanos(delta);
    if value == 0 {
        return "0s".to_string();
    }

    let mut out = String::new();
    if value < 0 {
        out.push('-');
    }
    let u = value.unsigned_abs();

    if u < NANOS_PER_SECOND {
        let (divisor, unit) = if u < NANOS_PER_MICRO {
            (1, "ns")
        } else if u < NANOS_PER_MILLI {
            (NANOS_PER_MICRO, "µs")
        } else {
            (NANOS_PER_MILLI, "ms")
        };
        push_fraction(&mut out, u, divisor);
        out.push_str(unit);
        return out;
    }

    let hours = u / NANOS_PER_HOUR;
    let minutes = (u % NANOS_PER_HOUR) / NANOS_PER_MINUTE;
    let seconds = u % NANOS_PER_MINUTE;

    if hours > 0 {
        let _ = write!(out, "{}h", hours);
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{}m", minutes);
    }
    push_fraction(&mut out, seconds, NANOS_PER_SECOND);
    out.push('s');
    out
}

/// Append `value / divisor` with trailing fractional zeros trimmed
fn push_fraction(out: &mut String, value: u64, divisor: u64) {
    let whole = value / divisor;
    let frac = value % divisor;
    let _ = write!(out, "{}", whole);
    if frac == 0 {
        return;
    }
    let width = divisor.ilog10() as usize;
    let digits = format!("{:0width$}", frac, width = width);
    out.push('.');
    out.push_str(digits.trim_end_matches('0'));
}

/// Parse a duration such as `100ms`, `2s`, `1m30s`, `1.5h` or `250us`
///
/// **Public** - used when building settings from CLI args
///
/// # Errors
/// * `ConfigError::InvalidDuration` - unknown unit, missing unit or number, overflow
pub fn parse_duration(input: &str) -> Result<TimeDelta, ConfigError> {
    let invalid = || ConfigError::InvalidDuration(input.to_string());

    let s = input.trim();
    let (negative, mut rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total = 0.0_f64;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_len == 0 {
            return Err(invalid());
        }
        let number: f64 = rest[..number_len].parse().map_err(|_| invalid())?;
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let scale = match &rest[..unit_len] {
            "ns" => 1,
            "us" | "µs" | "μs" => NANOS_PER_MICRO,
            "ms" => NANOS_PER_MILLI,
            "s" => NANOS_PER_SECOND,
            "m" => NANOS_PER_MINUTE,
            "h" => NANOS_PER_HOUR,
            _ => return Err(invalid()),
        };
        rest = &rest[unit_len..];

        total += number * scale as f64;
    }

    if total > i64::MAX as f64 {
        return Err(invalid());
    }
    let delta = TimeDelta::nanoseconds(total.round() as i64);
    Ok(if negative { -delta } else { delta })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_duration(TimeDelta::zero()), "0s");
    }

    #[test]
    fn test_format_sub_second_units() {
        assert_eq!(format_duration(TimeDelta::nanoseconds(42)), "42ns");
        assert_eq!(format_duration(TimeDelta::nanoseconds(1_500)), "1.5µs");
        assert_eq!(format_duration(TimeDelta::milliseconds(500)), "500ms");
        assert_eq!(format_duration(TimeDelta::microseconds(2_250)), "2.25ms");
    }

    #[test]
    fn test_format_seconds_minutes_hours() {
        assert_eq!(format_duration(TimeDelta::milliseconds(1_500)), "1.5s");
        assert_eq!(format_duration(TimeDelta::seconds(90)), "1m30s");
        assert_eq!(format_duration(TimeDelta::seconds(7_200)), "2h0m0s");
        assert_eq!(format_duration(TimeDelta::milliseconds(3_723_250)), "1h2m3.25s");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_duration(TimeDelta::milliseconds(-1_500)), "-1.5s");
    }

    #[test]
    fn test_views_share_one_value() {
        let delta = TimeDelta::milliseconds(2_500);
        assert_eq!(nanos(delta), 2_500_000_000);
        assert_eq!(secs(delta), 2.5);
    }

    #[test]
    fn test_parse_simple_units() {
        assert_eq!(parse_duration("100ms").unwrap(), TimeDelta::milliseconds(100));
        assert_eq!(parse_duration("2s").unwrap(), TimeDelta::seconds(2));
        assert_eq!(parse_duration("250us").unwrap(), TimeDelta::microseconds(250));
        assert_eq!(parse_duration("250µs").unwrap(), TimeDelta::microseconds(250));
        assert_eq!(parse_duration("0").unwrap(), TimeDelta::zero());
    }

    #[test]
    fn test_parse_compound_and_fractional() {
        assert_eq!(parse_duration("1m30s").unwrap(), TimeDelta::seconds(90));
        assert_eq!(parse_duration("1.5h").unwrap(), TimeDelta::minutes(90));
        assert_eq!(parse_duration("-2s").unwrap(), TimeDelta::seconds(-2));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("10").is_err());
        assert!(parse_duration("ms").is_err());
        assert!(parse_duration("3 days").is_err());
        assert!(parse_duration("1x").is_err());
    }
}
