#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for `eyefilter` unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::config::SettingValue;
use crate::config::manager::HOME_ENV_VAR;
use crate::controller::SettingsEditor;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the `EYEFILTER_HOME` environment variable.
static HOME_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// A fixed local date-time on an arbitrary day
pub fn local_time(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 14)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Poll `condition` every few milliseconds for up to five seconds
pub fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}

/// RAII guard that sets `EYEFILTER_HOME` for a test scope and restores the
/// original value when dropped.
///
/// # Safety Considerations
///
/// `std::env::set_var` and `std::env::remove_var` are unsafe because other threads
/// may read the environment concurrently. The guard holds `HOME_LOCK` for its whole
/// lifetime, so only one test at a time modifies the variable, and the original
/// value is restored on drop even if the test panics.
pub struct HomeGuard {
    original: Option<std::ffi::OsString>,
    // Held for the lifetime of the guard to keep modifications serial
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables under HOME_LOCK"
)]
impl HomeGuard {
    /// Point `EYEFILTER_HOME` at the given temp directory.
    pub fn new(temp_dir: &TempDir) -> Self {
        Self::with_path(temp_dir.path())
    }

    /// Point `EYEFILTER_HOME` at an arbitrary path.
    pub fn with_path(path: &Path) -> Self {
        let lock = HOME_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var_os(HOME_ENV_VAR);
        // SAFETY: HOME_LOCK serializes all writers; restored in Drop.
        unsafe {
            std::env::set_var(HOME_ENV_VAR, path);
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables under HOME_LOCK"
)]
impl Drop for HomeGuard {
    fn drop(&mut self) {
        // SAFETY: the guard still holds HOME_LOCK.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(HOME_ENV_VAR, original);
            }
        } else {
            unsafe {
                std::env::remove_var(HOME_ENV_VAR);
            }
        }
    }
}

/// Settings editor that replays scripted answers.
///
/// `None` answers simulate a cancelled prompt. Every label asked is recorded
/// together with the value that was pre-filled.
#[derive(Debug, Default)]
pub struct ScriptedEditor {
    answers: VecDeque<Option<String>>,
    /// Prompts shown, as `(label, current value)`
    pub asked: Vec<(String, String)>,
}

impl ScriptedEditor {
    /// Create an editor answering prompts in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| a.map(Into::into)).collect(),
            asked: Vec::new(),
        }
    }
}

impl SettingsEditor for ScriptedEditor {
    fn prompt_field(&mut self, label: &str, current: &SettingValue) -> Option<String> {
        self.asked.push((label.to_string(), current.to_string()));
        self.answers.pop_front().flatten()
    }
}
