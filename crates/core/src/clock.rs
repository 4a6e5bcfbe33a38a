//! Clock abstraction for derived date fields and construction timestamps.
//!
//! Ages and years-of-service are recomputed against the clock on every call,
//! never cached. Tests pin the clock with [`FixedClock`] for determinism.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Source of "now" for timestamping and date validation.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date, derived from [`Clock::now`].
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock implementation used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Pin the clock to midnight UTC on the given date.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            now: date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Whole calendar years from `from` to `to`, decremented by one when `to`'s
/// day-of-year precedes `from`'s (the anniversary has not happened yet).
pub fn years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if to.ordinal() < from.ordinal() {
        years -= 1;
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn years_between_counts_completed_anniversaries() {
        let born = date(1990, 6, 15);
        assert_eq!(years_between(born, date(2021, 6, 15)), 31);
        assert_eq!(years_between(born, date(2021, 6, 14)), 30);
        assert_eq!(years_between(born, date(2021, 6, 16)), 31);
    }

    #[test]
    fn years_between_same_date_is_zero() {
        let d = date(2020, 1, 1);
        assert_eq!(years_between(d, d), 0);
    }

    #[test]
    fn fixed_clock_reports_pinned_date() {
        let clock = FixedClock::on(date(2024, 3, 1));
        assert_eq!(clock.today(), date(2024, 3, 1));
    }
}
