//! Time sources for stamping records.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Source of arrival timestamps
pub trait Clock {
    fn now(&mut self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Replays a fixed sequence of instants
///
/// Once the sequence is exhausted the last instant is repeated, so a short
/// script never panics mid-stream. Used for replaying recorded timings and
/// for deterministic tests.
#[derive(Debug, Clone)]
pub struct ScriptedClock {
    instants: VecDeque<DateTime<Utc>>,
    last: DateTime<Utc>,
}

impl ScriptedClock {
    pub fn new(instants: impl IntoIterator<Item = DateTime<Utc>>) -> Self {
        let instants: VecDeque<_> = instants.into_iter().collect();
        let last = instants.front().copied().unwrap_or_default();
        Self { instants, last }
    }
}

impl Clock for ScriptedClock {
    fn now(&mut self) -> DateTime<Utc> {
        if let Some(next) = self.instants.pop_front() {
            self.last = next;
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_scripted_clock_replays_then_repeats() {
        let a = Utc.timestamp_opt(10, 0).unwrap();
        let b = Utc.timestamp_opt(20, 0).unwrap();
        let mut clock = ScriptedClock::new([a, b]);
        assert_eq!(clock.now(), a);
        assert_eq!(clock.now(), b);
        assert_eq!(clock.now(), b);
    }
}
