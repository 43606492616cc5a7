//! Stopwatch reference points for delta and total.

use chrono::{DateTime, TimeDelta, Utc};

/// Elapsed durations for one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lap {
    /// Since the last reset
    pub delta: TimeDelta,

    /// Since the stream started
    pub total: TimeDelta,
}

/// Holds the stream start and the last reset instant
///
/// `first` is fixed at construction (the first record's timestamp, not
/// process start); `last` moves on every [`Stopwatch::reset`].
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    first: DateTime<Utc>,
    last: DateTime<Utc>,
}

impl Stopwatch {
    /// Start the stopwatch at the first observed event
    pub fn start(at: DateTime<Utc>) -> Self {
        Self { first: at, last: at }
    }

    /// Delta and total for an event at `now`. Does not mutate.
    pub fn stamp(&self, now: DateTime<Utc>) -> Lap {
        Lap {
            delta: now - self.last,
            total: now - self.first,
        }
    }

    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.last = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000 + millis).unwrap()
    }

    #[test]
    fn test_first_stamp_is_zero() {
        let watch = Stopwatch::start(at(0));
        let lap = watch.stamp(at(0));
        assert_eq!(lap.delta, TimeDelta::zero());
        assert_eq!(lap.total, TimeDelta::zero());
    }

    #[test]
    fn test_reset_moves_delta_reference_only() {
        let mut watch = Stopwatch::start(at(0));
        watch.reset(at(400));
        let lap = watch.stamp(at(1_000));
        assert_eq!(lap.delta, TimeDelta::milliseconds(600));
        assert_eq!(lap.total, TimeDelta::milliseconds(1_000));
        assert_eq!(watch.stamp(at(400)).delta, TimeDelta::zero());
    }
}
