//! Time sources for freshness checks.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

/// Supplies the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(start) }
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|p| p.into_inner()) = to;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|p| p.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|p| p.into_inner())
    }
}

/// Seconds since the Unix epoch, with sub-second precision.
pub fn epoch_seconds(at: DateTime<Utc>) -> f64 {
    at.timestamp() as f64 + f64::from(at.timestamp_subsec_micros()) / 1_000_000.0
}

/// Inverse of [`epoch_seconds`]. `None` for non-finite or out-of-range input.
pub fn from_epoch_seconds(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let micros = ((secs - whole) * 1_000_000.0).round() as i64;
    DateTime::from_timestamp(whole as i64, 0).and_then(|t| t.checked_add_signed(Duration::microseconds(micros)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advance() {
        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let clock = ManualClock::new(start);
        clock.advance(Duration::minutes(5));
        assert_eq!(clock.now(), start + Duration::minutes(5));

        clock.set(start);
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_epoch_seconds_keeps_fraction() {
        let at = DateTime::from_timestamp(1_700_000_000, 250_000_000).unwrap();
        assert_eq!(epoch_seconds(at), 1_700_000_000.25);
    }

    #[test]
    fn test_from_epoch_seconds() {
        let at = from_epoch_seconds(1_700_000_000.5).unwrap();
        assert_eq!(at.timestamp(), 1_700_000_000);
        assert_eq!(at.timestamp_subsec_millis(), 500);

        assert!(from_epoch_seconds(f64::NAN).is_none());
        assert!(from_epoch_seconds(f64::INFINITY).is_none());
    }

    #[test]
    fn test_from_epoch_seconds_at_upper_bound() {
        let max = DateTime::<Utc>::MAX_UTC;
        assert_eq!(from_epoch_seconds(max.timestamp() as f64).map(|t| t.timestamp()), Some(max.timestamp()));
        assert!(from_epoch_seconds(max.timestamp() as f64 + 1.0).is_none());
        assert!(from_epoch_seconds(8.2102984128e12).is_none());
        assert!(from_epoch_seconds(-1.0e15).is_none());
    }
}
