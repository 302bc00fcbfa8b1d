//! Application state owned by the host event loop.
//!
//! `AppState` holds the pass session, the refresh timers and the strings
//! currently on display. The host calls [`AppState::toggle_pass`] on button
//! presses and [`AppState::tick`] whenever [`AppState::next_deadline`] passes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HallPassError, HallPassResult};
use crate::schedule::{current_period_label, period_display};
use crate::session::{format_elapsed, PassSession};
use crate::time::Clock;

use super::config::HallPassConfig;
use super::timers::{RefreshTimers, Refreshed};

pub const STATUS_READY: &str = "Ready to use the pass";
pub const STATUS_ACTIVE: &str = "Pass active";
pub const BUTTON_START: &str = "Start Pass";
pub const BUTTON_END: &str = "End Pass";
pub const TIMER_ZERO: &str = "00:00";

/// The strings the widget shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    pub title: String,
    pub period: String,
    pub status: String,
    pub holder: String,
    pub timer: String,
    pub button: String,
}

impl DisplaySnapshot {
    fn ready(title: &str, period: String) -> Self {
        Self {
            title: title.to_string(),
            period,
            status: STATUS_READY.to_string(),
            holder: String::new(),
            timer: TIMER_ZERO.to_string(),
            button: BUTTON_START.to_string(),
        }
    }
}

/// Outcome of a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassTransition {
    Started,
    Ended,
    /// The name prompt was dismissed.
    Cancelled,
}

pub struct AppState<C: Clock> {
    clock: C,
    config: HallPassConfig,
    session: PassSession,
    timers: RefreshTimers,
    display: DisplaySnapshot,
}

impl<C: Clock> AppState<C> {
    /// Builds an idle app with the period label already computed and the
    /// period refresh armed.
    pub fn new(clock: C, config: HallPassConfig) -> Self {
        let period = period_display(current_period_label(clock.local_now()));
        let display = DisplaySnapshot::ready(&config.display.title, period);
        let mut timers = RefreshTimers::from_settings(&config.timers);
        timers.period.arm(clock.now());

        Self {
            clock,
            config,
            session: PassSession::Inactive,
            timers,
            display,
        }
    }

    pub fn session(&self) -> &PassSession {
        &self.session
    }

    pub fn display(&self) -> &DisplaySnapshot {
        &self.display
    }

    pub fn timers(&self) -> &RefreshTimers {
        &self.timers
    }

    pub fn config(&self) -> &HallPassConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Handles the start/end button.
    ///
    /// While inactive, `prompt` is the name typed into the dialog (`None` if
    /// the dialog was dismissed). While active, `prompt` is ignored and the
    /// pass ends.
    pub fn toggle_pass(&mut self, prompt: Option<&str>) -> HallPassResult<PassTransition> {
        if self.session.is_active() {
            self.end_pass();
            return Ok(PassTransition::Ended);
        }

        match prompt {
            None => Ok(PassTransition::Cancelled),
            Some(name) => self.start_pass(name).map(|_| PassTransition::Started),
        }
    }

    /// Starts a pass. State is left untouched on error.
    ///
    /// # Errors
    /// * `ValidationError` if a pass is already out or the trimmed name is empty
    pub fn start_pass(&mut self, name: &str) -> HallPassResult<()> {
        if let Some(holder) = self.session.student_name() {
            log::warn!("Rejected pass start: {} is already out", holder);
            return Err(HallPassError::ValidationError(format!(
                "a pass is already active for {}",
                holder
            )));
        }

        let now = self.clock.now();
        let session = PassSession::start(name, now).map_err(|e| {
            log::debug!("Rejected pass start: {}", e);
            e
        })?;

        let holder = session.student_name().unwrap_or_default().to_string();
        log::info!("Pass started for {} at {}", holder, now);

        self.session = session;
        self.display.status = STATUS_ACTIVE.to_string();
        self.display.holder = format!("Out: {}", holder);
        self.display.timer = TIMER_ZERO.to_string();
        self.display.button = BUTTON_END.to_string();
        self.timers.elapsed.arm(now);
        Ok(())
    }

    /// Ends the current pass. Does nothing while inactive.
    pub fn end_pass(&mut self) {
        if !self.session.is_active() {
            return;
        }

        self.timers.elapsed.cancel();
        let now = self.clock.now();
        if let (Some(name), Some(elapsed)) =
            (self.session.student_name(), self.session.elapsed(now))
        {
            log::info!("Pass ended for {} after {}", name, format_elapsed(elapsed));
        }

        self.session = std::mem::take(&mut self.session).end();
        let period = std::mem::take(&mut self.display.period);
        self.display = DisplaySnapshot::ready(&self.config.display.title, period);
    }

    /// Recomputes the period label from the local clock.
    pub fn refresh_period(&mut self) {
        let label = current_period_label(self.clock.local_now());
        let period = period_display(label);
        if period != self.display.period {
            log::debug!("Period display changed to {:?}", period);
        }
        self.display.period = period;
    }

    /// Recomputes the elapsed timer. Does nothing while inactive.
    pub fn refresh_timer(&mut self) {
        if let Some(elapsed) = self.session.elapsed(self.clock.now()) {
            self.display.timer = format_elapsed(elapsed);
        }
    }

    /// Runs whichever refreshes are due at the current time.
    pub fn tick(&mut self) -> Refreshed {
        let refreshed = self.timers.poll(self.clock.now());
        if refreshed.period {
            self.refresh_period();
        }
        if refreshed.timer {
            self.refresh_timer();
        }
        refreshed
    }

    /// When the host should call [`AppState::tick`] next.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.timers.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::OUTSIDE_PERIODS;
    use crate::time::ManualClock;
    use chrono::NaiveDate;

    // Tuesday 2026-10-20
    fn clock_at(h: u32, m: u32, s: u32) -> ManualClock {
        let start = NaiveDate::from_ymd_opt(2026, 10, 20)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap();
        ManualClock::new(start)
    }

    #[test]
    fn test_new_state_is_ready() {
        let clock = clock_at(10, 0, 0);
        let app = AppState::new(&clock, HallPassConfig::default());

        let display = app.display();
        assert_eq!(display.title, "Bathroom Pass");
        assert_eq!(display.period, "Current Period: P2");
        assert_eq!(display.status, STATUS_READY);
        assert_eq!(display.holder, "");
        assert_eq!(display.timer, TIMER_ZERO);
        assert_eq!(display.button, BUTTON_START);
        assert!(app.timers().period.is_armed());
        assert!(!app.timers().elapsed.is_armed());
    }

    #[test]
    fn test_start_pass_updates_display() {
        let clock = clock_at(10, 0, 0);
        let mut app = AppState::new(&clock, HallPassConfig::default());

        app.start_pass("  Alice ").unwrap();
        assert!(app.session().is_active());
        assert_eq!(app.display().status, STATUS_ACTIVE);
        assert_eq!(app.display().holder, "Out: Alice");
        assert_eq!(app.display().button, BUTTON_END);
        assert!(app.timers().elapsed.is_armed());
    }

    #[test]
    fn test_blank_name_leaves_state_unchanged() {
        let clock = clock_at(10, 0, 0);
        let mut app = AppState::new(&clock, HallPassConfig::default());
        let before = app.display().clone();

        let err = app.start_pass("   ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(app.session(), &PassSession::Inactive);
        assert_eq!(app.display(), &before);
        assert!(!app.timers().elapsed.is_armed());
    }

    #[test]
    fn test_second_start_is_rejected() {
        let clock = clock_at(10, 0, 0);
        let mut app = AppState::new(&clock, HallPassConfig::default());
        app.start_pass("Alice").unwrap();

        let err = app.start_pass("Bob").unwrap_err();
        assert!(err.to_string().contains("already active for Alice"));
        assert_eq!(app.session().student_name(), Some("Alice"));
    }

    #[test]
    fn test_toggle_cancelled_prompt() {
        let clock = clock_at(10, 0, 0);
        let mut app = AppState::new(&clock, HallPassConfig::default());
        assert_eq!(app.toggle_pass(None).unwrap(), PassTransition::Cancelled);
        assert!(!app.session().is_active());
    }

    #[test]
    fn test_toggle_starts_then_ends() {
        let clock = clock_at(10, 0, 0);
        let mut app = AppState::new(&clock, HallPassConfig::default());

        assert_eq!(app.toggle_pass(Some("Alice")).unwrap(), PassTransition::Started);
        clock.advance_secs(42);
        assert_eq!(app.toggle_pass(None).unwrap(), PassTransition::Ended);

        assert_eq!(app.session(), &PassSession::Inactive);
        assert_eq!(app.display().status, STATUS_READY);
        assert_eq!(app.display().holder, "");
        assert_eq!(app.display().timer, TIMER_ZERO);
        assert_eq!(app.display().button, BUTTON_START);
        assert!(!app.timers().elapsed.is_armed());
    }

    #[test]
    fn test_end_pass_when_inactive_is_noop() {
        let clock = clock_at(10, 0, 0);
        let mut app = AppState::new(&clock, HallPassConfig::default());
        let before = app.display().clone();
        app.end_pass();
        assert_eq!(app.display(), &before);
        assert_eq!(app.session(), &PassSession::Inactive);
    }

    #[test]
    fn test_refresh_timer_ignored_while_inactive() {
        let clock = clock_at(10, 0, 0);
        let mut app = AppState::new(&clock, HallPassConfig::default());
        clock.advance_secs(90);
        app.refresh_timer();
        assert_eq!(app.display().timer, TIMER_ZERO);
    }

    #[test]
    fn test_refresh_period_crosses_last_bell() {
        let clock = clock_at(15, 32, 50);
        let mut app = AppState::new(&clock, HallPassConfig::default());
        assert_eq!(app.display().period, "Current Period: P6");

        clock.advance_secs(10);
        app.refresh_period();
        assert_eq!(app.display().period, OUTSIDE_PERIODS);
    }
}
