//! Core domain models for the bell schedule.
//!
//! This module defines the value types the period engine scans: labeled
//! class periods and the ordered schedules that hold them.

pub mod domain;
