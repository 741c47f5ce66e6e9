//! Current-time source.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Where "now" comes from. Grid building and record timestamps go through
/// this so tests can pin the date.
pub trait Clock {
    /// Current instant, used to timestamp new records.
    fn now(&self) -> DateTime<Utc>;

    /// Today's calendar date, used for the `is_today` flag.
    fn today(&self) -> NaiveDate;
}

/// Reads the wall clock. `today` is the local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one instant. `today` is that instant's UTC date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        FixedClock { now }
    }

    /// Noon UTC on `date`.
    pub fn on(date: NaiveDate) -> Self {
        FixedClock {
            now: date.and_hms_opt(12, 0, 0).unwrap_or_default().and_utc(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
