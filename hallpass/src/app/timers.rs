//! Cancellable recurring tasks driven by the host loop.
//!
//! Nothing here sleeps or spawns; the host asks for the next deadline,
//! waits until then, and polls. A cancelled task never fires again until it
//! is re-armed.

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::config::TimerSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringTask {
    interval: Duration,
    next_due: Option<DateTime<Utc>>,
}

impl RecurringTask {
    /// Creates an idle task with the given interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedules the first firing one interval after `now`.
    pub fn arm(&mut self, now: DateTime<Utc>) {
        self.next_due = after(now, self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.next_due
    }

    /// Returns `true` if the task is due at `now` and reschedules it.
    ///
    /// The next firing is measured from `now`, so a late poll fires once
    /// rather than catching up on missed intervals.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                self.next_due = after(now, self.interval);
                true
            }
            _ => false,
        }
    }
}

fn after(now: DateTime<Utc>, interval: Duration) -> Option<DateTime<Utc>> {
    chrono::Duration::from_std(interval)
        .ok()
        .and_then(|delta| now.checked_add_signed(delta))
}

/// What a poll of [`RefreshTimers`] found due.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Refreshed {
    pub period: bool,
    pub timer: bool,
}

impl Refreshed {
    pub fn is_empty(&self) -> bool {
        !self.period && !self.timer
    }
}

/// The period-label refresh and the elapsed-timer refresh.
///
/// The period task runs for the life of the app. The elapsed task is armed
/// only while a pass is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTimers {
    pub period: RecurringTask,
    pub elapsed: RecurringTask,
}

impl RefreshTimers {
    pub fn from_settings(settings: &TimerSettings) -> Self {
        Self {
            period: RecurringTask::new(settings.period_refresh()),
            elapsed: RecurringTask::new(settings.elapsed_refresh()),
        }
    }

    pub fn poll(&mut self, now: DateTime<Utc>) -> Refreshed {
        Refreshed {
            period: self.period.poll(now),
            timer: self.elapsed.poll(now),
        }
    }

    /// Earliest instant at which either task is due.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        match (self.period.next_due(), self.elapsed.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
