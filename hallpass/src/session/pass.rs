//! The pass session state machine.
//!
//! A session is either [`PassSession::Inactive`] or [`PassSession::Active`].
//! `start` moves Inactive to Active and `end` moves back. The type does not
//! stop a caller from starting over an active pass; the owner enforces that
//! at most one pass is out at a time.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HallPassError, HallPassResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PassSession {
    #[default]
    Inactive,
    Active {
        student_name: String,
        started_at: DateTime<Utc>,
    },
}

impl PassSession {
    /// Starts a pass for `name` at `now`.
    ///
    /// The name is trimmed before use.
    ///
    /// # Returns
    /// * `Ok(PassSession::Active)` with the trimmed name
    /// * `Err(HallPassError::ValidationError)` if the trimmed name is empty
    pub fn start(name: &str, now: DateTime<Utc>) -> HallPassResult<Self> {
        let student_name = name.trim();
        if student_name.is_empty() {
            return Err(HallPassError::ValidationError(
                "student name must not be empty".to_string(),
            ));
        }

        Ok(PassSession::Active {
            student_name: student_name.to_string(),
            started_at: now,
        })
    }

    /// Ends the pass. Ending an inactive session is a no-op.
    pub fn end(self) -> Self {
        PassSession::Inactive
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PassSession::Active { .. })
    }

    pub fn student_name(&self) -> Option<&str> {
        match self {
            PassSession::Active { student_name, .. } => Some(student_name),
            PassSession::Inactive => None,
        }
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        match self {
            PassSession::Active { started_at, .. } => Some(*started_at),
            PassSession::Inactive => None,
        }
    }

    /// Time since the pass started, or `None` when inactive.
    ///
    /// A clock that reads earlier than the start instant yields zero.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Option<Duration> {
        let started_at = self.started_at()?;
        Some((now - started_at).to_std().unwrap_or(Duration::ZERO))
    }
}

/// Formats a duration as zero-padded `MM:SS`.
///
/// Minutes keep counting past 59, so 75 minutes 3 seconds renders as
/// `"75:03"`. Fractional seconds are dropped.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_seconds = elapsed.as_secs();
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 20, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_start_trims_name() {
        let session = PassSession::start("  Alice  ", t0()).unwrap();
        assert_eq!(session.student_name(), Some("Alice"));
        assert_eq!(session.started_at(), Some(t0()));
        assert!(session.is_active());
    }

    #[test]
    fn test_elapsed_formats_minutes_and_seconds() {
        let session = PassSession::start("  Alice  ", t0()).unwrap();
        let elapsed = session
            .elapsed(t0() + chrono::Duration::seconds(65))
            .unwrap();
        assert_eq!(format_elapsed(elapsed), "01:05");
    }

    #[test]
    fn test_start_rejects_blank_names() {
        for name in ["", "   ", "\t\n"] {
            let err = PassSession::start(name, t0()).unwrap_err();
            assert!(err.is_validation(), "{:?} should be rejected", name);
        }
    }

    #[test]
    fn test_end_is_idempotent() {
        assert_eq!(PassSession::Inactive.end(), PassSession::Inactive);

        let active = PassSession::start("Bo", t0()).unwrap();
        assert_eq!(active.end().end(), PassSession::Inactive);
    }

    #[test]
    fn test_elapsed_is_undefined_when_inactive() {
        assert_eq!(PassSession::Inactive.elapsed(t0()), None);
    }

    #[test]
    fn test_elapsed_clamps_clock_skew_to_zero() {
        let session = PassSession::start("Cy", t0()).unwrap();
        let earlier = t0() - chrono::Duration::seconds(30);
        assert_eq!(session.elapsed(earlier), Some(Duration::ZERO));
    }

    #[test]
    fn test_format_elapsed_boundaries() {
        let cases = [
            (0, "00:00"),
            (59, "00:59"),
            (60, "01:00"),
            (3605, "60:05"),
            (4503, "75:03"),
        ];
        for (secs, expected) in cases {
            assert_eq!(format_elapsed(Duration::from_secs(secs)), expected);
        }
    }

    #[test]
    fn test_format_elapsed_truncates_subseconds() {
        assert_eq!(format_elapsed(Duration::from_millis(59_999)), "00:59");
    }

    #[test]
    fn test_session_serializes_with_state_tag() {
        let json = serde_json::to_value(PassSession::start("Dee", t0()).unwrap()).unwrap();
        assert_eq!(json["state"], "active");
        assert_eq!(json["student_name"], "Dee");

        let inactive = serde_json::to_value(PassSession::Inactive).unwrap();
        assert_eq!(inactive["state"], "inactive");
    }
}
