//! Hall pass session tracking.

pub mod pass;

pub use pass::{format_elapsed, PassSession};
