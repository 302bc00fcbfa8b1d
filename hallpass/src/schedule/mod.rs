//! Period lookup against the fixed weekly bell schedule.
//!
//! - [`bell`]: the Monday and Tuesday–Friday schedules, weekday selection,
//!   the label lookup and its display text
//!
//! # Example
//!
//! ```
//! use hallpass::schedule::{current_period_label, period_display};
//! use chrono::NaiveDate;
//!
//! // 2026-10-19 is a Monday
//! let now = NaiveDate::from_ymd_opt(2026, 10, 19)
//!     .unwrap()
//!     .and_hms_opt(10, 16, 0)
//!     .unwrap();
//! assert_eq!(current_period_label(now), "2");
//! assert_eq!(period_display(current_period_label(now)), "Current Period: P2");
//! ```

pub mod bell;


pub use bell::{
    current_period_label, period_display, schedule_for, MONDAY_SCHEDULE, OUTSIDE_PERIODS,
    STANDARD_SCHEDULE,
};
