//! HallPass - hall pass tracking and class period lookup
//!
//! The period engine ([`schedule`]) maps a local date and time to the class
//! period in session. The pass session ([`session`]) tracks who is out and
//! for how long. [`app::AppState`] ties both to a clock for a host event loop.

pub mod app;
pub mod core;
pub mod error;
pub mod schedule;
pub mod session;
pub mod time;

pub use error::{HallPassError, HallPassResult};
