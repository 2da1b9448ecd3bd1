//! Utility functions and helpers
//!
//! This module contains the injectable clock used by the result cache.

pub mod time;

pub use time::{Clock, ManualClock, SystemClock};
