//! `eyefilter` - Time-of-day page filter
//!
//! Adjusts a page's brightness and sepia depending on the time of day, with
//! user-configurable thresholds persisted in a key-value settings store.
//! The `FilterController` decides day or night from an injected clock, writes a
//! single CSS rule through a `StyleSink`, and re-applies it on a background timer,
//! on page focus/visibility events and from the host menu.

// Module declarations
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod schedule;
pub mod timer;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use controller::{FilterController, PageEvent, SettingsEditor};
pub use error::{EyeFilterError, Result};
