//! The bell schedule and the period engine.
//!
//! Monday runs a shortened day; Tuesday through Friday share the standard
//! day. Weekends have no periods. Passing time between two periods is
//! reported as the following period.

use chrono::{Datelike, Timelike, Weekday};

use crate::core::domain::{hm, ClassPeriod, PeriodSchedule};

/// Display text when no period is in session.
pub const OUTSIDE_PERIODS: &str = "Outside of class periods";

static MONDAY_PERIODS: [ClassPeriod; 6] = [
    ClassPeriod::new(hm(9, 20), hm(10, 16), "1"),
    ClassPeriod::new(hm(10, 16), hm(11, 12), "2"),
    ClassPeriod::new(hm(11, 12), hm(12, 8), "3"),
    ClassPeriod::new(hm(12, 8), hm(13, 40), "4"),
    ClassPeriod::new(hm(13, 40), hm(14, 45), "5"),
    ClassPeriod::new(hm(14, 45), hm(15, 35), "6"),
];

static STANDARD_PERIODS: [ClassPeriod; 6] = [
    ClassPeriod::new(hm(8, 45), hm(9, 48), "1"),
    ClassPeriod::new(hm(9, 48), hm(10, 51), "2"),
    ClassPeriod::new(hm(10, 51), hm(11, 54), "3"),
    ClassPeriod::new(hm(11, 54), hm(13, 33), "4"),
    ClassPeriod::new(hm(13, 33), hm(14, 36), "5"),
    ClassPeriod::new(hm(14, 36), hm(15, 33), "6"),
];

/// Shortened Monday schedule.
pub static MONDAY_SCHEDULE: PeriodSchedule = PeriodSchedule::new("monday", &MONDAY_PERIODS);

/// Tuesday through Friday schedule.
pub static STANDARD_SCHEDULE: PeriodSchedule =
    PeriodSchedule::new("standard", &STANDARD_PERIODS);

/// Selects the schedule for a weekday, or `None` on weekends.
pub fn schedule_for(weekday: Weekday) -> Option<&'static PeriodSchedule> {
    match weekday {
        Weekday::Mon => Some(&MONDAY_SCHEDULE),
        Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => Some(&STANDARD_SCHEDULE),
        Weekday::Sat | Weekday::Sun => None,
    }
}

/// Returns the label of the period in session at `now`.
///
/// The empty string means `now` is outside every tracked period: a weekend,
/// before the first bell, or at/after the last period's end.
///
/// # Arguments
/// * `now` - Local civil date and time (`NaiveDateTime`, `DateTime<Local>`, ...)
///
/// # Example
/// ```
/// use hallpass::schedule::current_period_label;
/// use chrono::NaiveDate;
///
/// // Tuesday
/// let day = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
/// assert_eq!(current_period_label(day.and_hms_opt(8, 44, 59).unwrap()), "");
/// assert_eq!(current_period_label(day.and_hms_opt(8, 45, 0).unwrap()), "1");
/// ```
pub fn current_period_label<T>(now: T) -> &'static str
where
    T: Datelike + Timelike + Copy,
{
    schedule_for(now.weekday())
        .and_then(|schedule| schedule.label_at(now))
        .unwrap_or("")
}

/// Formats a period label for display.
///
/// An empty label renders as [`OUTSIDE_PERIODS`]; any other label `L`
/// renders as `"Current Period: PL"`.
pub fn period_display(label: &str) -> String {
    if label.is_empty() {
        OUTSIDE_PERIODS.to_string()
    } else {
        format!("Current Period: P{}", label)
    }
}
