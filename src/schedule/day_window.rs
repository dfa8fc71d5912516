//! Day window parsing and membership

use crate::config::{SettingKey, SettingValue};
use crate::error::{EyeFilterError, Result};
use chrono::NaiveTime;
use std::fmt;

/// Whether the filter uses its day or night values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    /// Inside the day window
    Day,
    /// Outside the day window
    Night,
}

impl fmt::Display for DayPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayPhase::Day => f.write_str("day"),
            DayPhase::Night => f.write_str("night"),
        }
    }
}

/// Parse an `H:MM` (or `HH:MM`) time of day stored under `key`
pub fn parse_time_of_day(key: &'static str, value: &str) -> Result<NaiveTime> {
    let invalid = || EyeFilterError::InvalidTimeOfDay {
        key,
        value: value.to_string(),
    };

    let (hours, minutes) = value.trim().split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.trim().parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}

/// The daily `[start, end)` range during which day values apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl DayWindow {
    /// Window from explicit boundaries
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Window from the stored `day_start` / `day_end` values
    pub fn from_settings(day_start: &SettingValue, day_end: &SettingValue) -> Result<Self> {
        Ok(Self {
            start: parse_time_of_day(SettingKey::DayStart.as_str(), &day_start.to_string())?,
            end: parse_time_of_day(SettingKey::DayEnd.as_str(), &day_end.to_string())?,
        })
    }

    /// Inclusive start
    pub fn start(self) -> NaiveTime {
        self.start
    }

    /// Exclusive end
    pub fn end(self) -> NaiveTime {
        self.end
    }

    /// Whether `time` falls inside the window
    pub fn contains(self, time: NaiveTime) -> bool {
        let Self { start, end } = self;

        if start < end {
            start <= time && time < end
        } else if start > end {
            // wraps midnight
            time >= start || time < end
        } else {
            false
        }
    }

    /// Phase for the given `time`
    pub fn phase_at(self, time: NaiveTime) -> DayPhase {
        if self.contains(time) {
            DayPhase::Day
        } else {
            DayPhase::Night
        }
    }
}

impl fmt::Display for DayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}
