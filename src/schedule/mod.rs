//! Time-of-day scheduling module
//!
//! Decides whether the filter is in its day or night phase.
//!
//! # Overview
//!
//! - `Clock`: injectable source of the local wall-clock time
//! - `DayWindow`: the `[day_start, day_end)` range, parsed from `H:MM` settings
//! - `DayPhase`: the result of checking a time against the window
//!
//! # Day Window Semantics
//!
//! Boundaries have minute precision (seconds are always zero):
//!
//! 1. `start < end`: day is `start <= now < end` on the current day
//! 2. `start > end`: the window wraps midnight, day is `now >= start || now < end`
//! 3. `start == end`: the window is empty and it is always night

pub mod clock;
pub mod day_window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use day_window::{DayPhase, DayWindow, parse_time_of_day};
