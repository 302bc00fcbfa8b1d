//! Domain models for class periods and bell schedules.
//!
//! Times are stored as seconds from local midnight so the built-in schedules
//! can live in `static` tables and be compared against any [`Timelike`] value.

use chrono::{NaiveTime, Timelike};

use crate::error::{HallPassError, HallPassResult};

/// Seconds from midnight for an `HH:MM` wall-clock time.
pub const fn hm(hour: u32, minute: u32) -> u32 {
    hour * 3600 + minute * 60
}

/// A single labeled block of class time.
///
/// The interval is half-open: a time belongs to the period when
/// `start <= time < end`. Passing time before a period is folded into the
/// period itself, so adjacent periods share a boundary.
///
/// # Examples
///
/// ```
/// use hallpass::core::domain::{hm, ClassPeriod};
/// use chrono::NaiveTime;
///
/// let period = ClassPeriod::new(hm(8, 45), hm(9, 48), "1");
/// assert!(period.contains(NaiveTime::from_hms_opt(8, 45, 0).unwrap()));
/// assert!(!period.contains(NaiveTime::from_hms_opt(9, 48, 0).unwrap()));
/// assert_eq!(period.duration_minutes(), 63);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassPeriod {
    pub start: u32,
    pub end: u32,
    pub label: &'static str,
}

impl ClassPeriod {
    /// Creates a period from second-of-day bounds and a label.
    pub const fn new(start: u32, end: u32, label: &'static str) -> Self {
        Self { start, end, label }
    }

    /// Returns `true` when `time` falls in `[start, end)`.
    pub fn contains<T: Timelike>(&self, time: T) -> bool {
        let secs = time.num_seconds_from_midnight();
        self.start <= secs && secs < self.end
    }

    /// Start of the period as a [`NaiveTime`].
    pub fn start_time(&self) -> NaiveTime {
        seconds_to_time(self.start)
    }

    /// End of the period (exclusive) as a [`NaiveTime`].
    pub fn end_time(&self) -> NaiveTime {
        seconds_to_time(self.end)
    }

    /// Length of the period in whole minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end.saturating_sub(self.start) / 60
    }
}

fn seconds_to_time(secs: u32) -> NaiveTime {
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or(NaiveTime::MIN)
}

/// An ordered, non-overlapping set of class periods for one kind of school day.
///
/// Entries are sorted by start time. Lookup returns the first entry whose
/// half-open interval contains the queried time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSchedule {
    pub name: &'static str,
    pub periods: &'static [ClassPeriod],
}

impl PeriodSchedule {
    pub const fn new(name: &'static str, periods: &'static [ClassPeriod]) -> Self {
        Self { name, periods }
    }

    /// Label of the period containing `time`, if any.
    pub fn label_at<T: Timelike + Copy>(&self, time: T) -> Option<&'static str> {
        self.periods
            .iter()
            .find(|period| period.contains(time))
            .map(|period| period.label)
    }

    /// First start and last end covered by this schedule.
    pub fn covered_range(&self) -> Option<(u32, u32)> {
        let first = self.periods.first()?;
        let last = self.periods.last()?;
        Some((first.start, last.end))
    }

    /// Checks ordering and overlap of the entries.
    ///
    /// # Returns
    /// * `Ok(())` if every entry has `start < end` and entries are sorted
    ///   without overlap
    /// * `Err(HallPassError::ValidationError)` describing the first violation
    pub fn validate(&self) -> HallPassResult<()> {
        for period in self.periods {
            if period.start >= period.end {
                return Err(HallPassError::ValidationError(format!(
                    "{} schedule: period {} starts at {} but ends at {}",
                    self.name,
                    period.label,
                    period.start_time(),
                    period.end_time()
                )));
            }
        }

        for pair in self.periods.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.start < prev.end {
                return Err(HallPassError::ValidationError(format!(
                    "{} schedule: period {} ({}) overlaps period {} (ends {})",
                    self.name,
                    next.label,
                    next.start_time(),
                    prev.label,
                    prev.end_time()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: [ClassPeriod; 2] = [
        ClassPeriod::new(hm(9, 0), hm(10, 0), "A"),
        ClassPeriod::new(hm(10, 0), hm(11, 0), "B"),
    ];

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_hm_counts_seconds_from_midnight() {
        assert_eq!(hm(0, 0), 0);
        assert_eq!(hm(9, 20), 33_600);
        assert_eq!(hm(15, 35), 56_100);
    }

    #[test]
    fn test_period_bounds_round_trip_to_naive_time() {
        let period = ClassPeriod::new(hm(12, 8), hm(13, 40), "4");
        assert_eq!(period.start_time(), at(12, 8, 0));
        assert_eq!(period.end_time(), at(13, 40, 0));
        assert_eq!(period.duration_minutes(), 92);
    }

    #[test]
    fn test_contains_ignores_subsecond_part() {
        let period = ClassPeriod::new(hm(9, 0), hm(10, 0), "A");
        let just_before_end = NaiveTime::from_hms_milli_opt(9, 59, 59, 999).unwrap();
        assert!(period.contains(just_before_end));
    }

    #[test]
    fn test_label_at_uses_half_open_intervals() {
        let schedule = PeriodSchedule::new("sample", &SAMPLE);
        assert_eq!(schedule.label_at(at(8, 59, 59)), None);
        assert_eq!(schedule.label_at(at(9, 0, 0)), Some("A"));
        assert_eq!(schedule.label_at(at(10, 0, 0)), Some("B"));
        assert_eq!(schedule.label_at(at(11, 0, 0)), None);
    }

    #[test]
    fn test_covered_range() {
        let schedule = PeriodSchedule::new("sample", &SAMPLE);
        assert_eq!(schedule.covered_range(), Some((hm(9, 0), hm(11, 0))));
        assert_eq!(PeriodSchedule::new("empty", &[]).covered_range(), None);
    }

    #[test]
    fn test_validate_rejects_overlap() {
        static OVERLAPPING: [ClassPeriod; 2] = [
            ClassPeriod::new(hm(9, 0), hm(10, 5), "A"),
            ClassPeriod::new(hm(10, 0), hm(11, 0), "B"),
        ];
        let err = PeriodSchedule::new("bad", &OVERLAPPING)
            .validate()
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("overlaps period A"));
    }

    #[test]
    fn test_validate_rejects_empty_interval() {
        static BACKWARDS: [ClassPeriod; 1] = [ClassPeriod::new(hm(10, 0), hm(9, 0), "A")];
        assert!(PeriodSchedule::new("bad", &BACKWARDS).validate().is_err());
    }

    #[test]
    fn test_validate_accepts_gaps() {
        static GAPPED: [ClassPeriod; 2] = [
            ClassPeriod::new(hm(9, 0), hm(10, 0), "A"),
            ClassPeriod::new(hm(10, 30), hm(11, 0), "B"),
        ];
        assert!(PeriodSchedule::new("gapped", &GAPPED).validate().is_ok());
    }
}
