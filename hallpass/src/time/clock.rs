//! Wall-clock sources.
//!
//! The period engine reads local civil time; pass sessions are stamped with
//! UTC instants so elapsed time is unaffected by DST shifts.

use std::cell::Cell;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Source of the current time.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Current local date and time, used for period lookup.
    fn local_now(&self) -> NaiveDateTime;
}

/// The system wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
///
/// Local time and UTC are treated as the same timeline, which keeps tests
/// independent of the machine's timezone.
///
/// # Example
/// ```
/// use hallpass::time::{Clock, ManualClock};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let clock = ManualClock::new(start);
/// clock.advance_secs(65);
/// assert_eq!(clock.local_now(), start + chrono::Duration::seconds(65));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Cell<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Cell::new(start),
        }
    }

    pub fn set(&self, to: NaiveDateTime) {
        self.current.set(to);
    }

    /// Moves the clock by `delta`, which may be negative.
    pub fn advance(&self, delta: chrono::Duration) {
        self.current.set(self.current.get() + delta);
    }

    pub fn advance_secs(&self, secs: i64) {
        self.advance(chrono::Duration::seconds(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.current.get())
    }

    fn local_now(&self) -> NaiveDateTime {
        self.current.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn local_now(&self) -> NaiveDateTime {
        (**self).local_now()
    }
}
