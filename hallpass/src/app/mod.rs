//! The widget's application layer.
//!
//! - [`config`]: TOML configuration for refresh intervals and title
//! - [`timers`]: the two cancellable recurring refresh tasks
//! - [`state`]: [`AppState`], which owns the pass session and display strings

pub mod config;
pub mod state;
pub mod timers;

pub use config::{DisplaySettings, HallPassConfig, TimerSettings};
pub use state::{AppState, DisplaySnapshot, PassTransition};
pub use timers::{RecurringTask, RefreshTimers, Refreshed};
