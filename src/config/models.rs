//! Configuration data models
//!
//! This module defines the filter settings (the seven persisted keys) and the
//! host configuration that tells the binary where to keep its files.

use crate::config::store::SettingsStore;
use crate::error::{EyeFilterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Fallback auto-update interval in minutes
pub const DEFAULT_UPDATE_INTERVAL_MINUTES: u64 = 30;

/// The seven persisted filter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// CSS brightness percent during the day
    BrightnessDay,
    /// CSS sepia percent during the day
    SepiaDay,
    /// CSS brightness percent during the night
    BrightnessNight,
    /// CSS sepia percent during the night
    SepiaNight,
    /// Inclusive start of the day window (`H:MM`)
    DayStart,
    /// Exclusive end of the day window (`H:MM`)
    DayEnd,
    /// Auto-update period in minutes
    UpdateInterval,
}

impl SettingKey {
    /// All keys, in the order the settings dialog asks for them
    pub const ALL: [SettingKey; 7] = [
        SettingKey::BrightnessDay,
        SettingKey::SepiaDay,
        SettingKey::BrightnessNight,
        SettingKey::SepiaNight,
        SettingKey::DayStart,
        SettingKey::DayEnd,
        SettingKey::UpdateInterval,
    ];

    /// Name of the key in the settings store
    pub const fn as_str(self) -> &'static str {
        match self {
            SettingKey::BrightnessDay => "brightness_day",
            SettingKey::SepiaDay => "sepia_day",
            SettingKey::BrightnessNight => "brightness_night",
            SettingKey::SepiaNight => "sepia_night",
            SettingKey::DayStart => "day_start",
            SettingKey::DayEnd => "day_end",
            SettingKey::UpdateInterval => "update_interval",
        }
    }

    /// Label shown when the settings dialog prompts for this key
    pub const fn prompt_label(self) -> &'static str {
        match self {
            SettingKey::BrightnessDay => "day brightness (%):",
            SettingKey::SepiaDay => "day temperature (%):",
            SettingKey::BrightnessNight => "night brightness (%):",
            SettingKey::SepiaNight => "night temperature (%):",
            SettingKey::DayStart => "start of the day (HH:MM):",
            SettingKey::DayEnd => "end of the day (HH:MM):",
            SettingKey::UpdateInterval => "update interval (min):",
        }
    }

    /// Value seeded on first run
    pub fn default_value(self) -> SettingValue {
        match self {
            SettingKey::BrightnessDay => SettingValue::Integer(90),
            SettingKey::SepiaDay => SettingValue::Integer(40),
            SettingKey::BrightnessNight => SettingValue::Integer(40),
            SettingKey::SepiaNight => SettingValue::Integer(60),
            SettingKey::DayStart => SettingValue::Text("7:30".to_string()),
            SettingKey::DayEnd => SettingValue::Text("18:30".to_string()),
            SettingKey::UpdateInterval => SettingValue::Integer(30),
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored setting value
///
/// Values are not validated on write: whatever the user typed is kept and used
/// verbatim when the filter rule is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Whole number
    Integer(i64),
    /// Free-form text
    Text(String),
}

impl SettingValue {
    /// Convert raw user input into a value, keeping integers as integers
    pub fn from_input(input: &str) -> Self {
        input
            .parse::<i64>()
            .map_or_else(|_| SettingValue::Text(input.to_string()), SettingValue::Integer)
    }

    /// Convert a JSON scalar read from disk
    ///
    /// Integers and strings map directly. Other scalars such as `85.5` or `true`
    /// are kept as their JSON text. Returns `None` for null, arrays and objects.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(SettingValue::Text(s)),
            serde_json::Value::Number(n) => Some(
                n.as_i64()
                    .map_or_else(|| SettingValue::Text(n.to_string()), SettingValue::Integer),
            ),
            serde_json::Value::Bool(b) => Some(SettingValue::Text(b.to_string())),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => None,
        }
    }

    /// Interpret the value as a positive number of minutes
    ///
    /// Returns `None` for zero, negative, empty or non-numeric values.
    pub fn as_positive_minutes(&self) -> Option<u64> {
        match self {
            SettingValue::Integer(n) => u64::try_from(*n).ok().filter(|&m| m > 0),
            SettingValue::Text(s) => s.trim().parse::<u64>().ok().filter(|&m| m > 0),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Integer(n) => write!(f, "{n}"),
            SettingValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Integer(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

/// Snapshot of all seven filter settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSettings {
    /// Brightness percent during the day
    pub brightness_day: SettingValue,
    /// Sepia percent during the day
    pub sepia_day: SettingValue,
    /// Brightness percent during the night
    pub brightness_night: SettingValue,
    /// Sepia percent during the night
    pub sepia_night: SettingValue,
    /// Start of the day window
    pub day_start: SettingValue,
    /// End of the day window
    pub day_end: SettingValue,
    /// Auto-update period in minutes
    pub update_interval: SettingValue,
}

impl FilterSettings {
    /// Read all seven values from the store
    ///
    /// Fails with [`EyeFilterError::MissingSetting`] if any key is absent.
    pub fn load(store: &dyn SettingsStore) -> Result<Self> {
        let read = |key: SettingKey| -> Result<SettingValue> {
            store
                .get(key.as_str())?
                .ok_or(EyeFilterError::MissingSetting(key.as_str()))
        };

        Ok(Self {
            brightness_day: read(SettingKey::BrightnessDay)?,
            sepia_day: read(SettingKey::SepiaDay)?,
            brightness_night: read(SettingKey::BrightnessNight)?,
            sepia_night: read(SettingKey::SepiaNight)?,
            day_start: read(SettingKey::DayStart)?,
            day_end: read(SettingKey::DayEnd)?,
            update_interval: read(SettingKey::UpdateInterval)?,
        })
    }

    /// Value for a given key
    pub fn get(&self, key: SettingKey) -> &SettingValue {
        match key {
            SettingKey::BrightnessDay => &self.brightness_day,
            SettingKey::SepiaDay => &self.sepia_day,
            SettingKey::BrightnessNight => &self.brightness_night,
            SettingKey::SepiaNight => &self.sepia_night,
            SettingKey::DayStart => &self.day_start,
            SettingKey::DayEnd => &self.day_end,
            SettingKey::UpdateInterval => &self.update_interval,
        }
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            brightness_day: SettingKey::BrightnessDay.default_value(),
            sepia_day: SettingKey::SepiaDay.default_value(),
            brightness_night: SettingKey::BrightnessNight.default_value(),
            sepia_night: SettingKey::SepiaNight.default_value(),
            day_start: SettingKey::DayStart.default_value(),
            day_end: SettingKey::DayEnd.default_value(),
            update_interval: SettingKey::UpdateInterval.default_value(),
        }
    }
}

/// Host configuration for the `eyefilter` binary
///
/// Relative paths are resolved against the eyefilter home directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON document holding the seven filter settings
    pub settings_file: PathBuf,
    /// User stylesheet the filter rule is written to
    pub stylesheet_file: PathBuf,
}

impl AppConfig {
    /// Settings file path, resolved against `home`
    pub fn settings_path(&self, home: &Path) -> PathBuf {
        home.join(&self.settings_file)
    }

    /// Stylesheet path, resolved against `home`
    pub fn stylesheet_path(&self, home: &Path) -> PathBuf {
        home.join(&self.stylesheet_file)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings_file: PathBuf::from("settings.json"),
            stylesheet_file: PathBuf::from("eye-filter.css"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::store::MemoryStore;

    #[test]
    fn test_keys_are_unique_and_ordered() {
        let names: Vec<&str> = SettingKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            [
                "brightness_day",
                "sepia_day",
                "brightness_night",
                "sepia_night",
                "day_start",
                "day_end",
                "update_interval"
            ]
        );
    }

    #[test]
    fn test_default_settings() {
        let settings = FilterSettings::default();
        assert_eq!(settings.brightness_day, SettingValue::Integer(90));
        assert_eq!(settings.sepia_night, SettingValue::Integer(60));
        assert_eq!(settings.day_start, SettingValue::Text("7:30".to_string()));
        assert_eq!(settings.update_interval, SettingValue::Integer(30));
    }

    #[test]
    fn test_value_from_input() {
        assert_eq!(SettingValue::from_input("85"), SettingValue::Integer(85));
        assert_eq!(
            SettingValue::from_input("8:15"),
            SettingValue::Text("8:15".to_string())
        );
        assert_eq!(
            SettingValue::from_input("bright"),
            SettingValue::Text("bright".to_string())
        );
    }

    #[test]
    fn test_value_display_is_verbatim() {
        assert_eq!(SettingValue::Integer(90).to_string(), "90");
        assert_eq!(SettingValue::from("12.5").to_string(), "12.5");
    }

    #[test]
    fn test_positive_minutes() {
        assert_eq!(SettingValue::Integer(15).as_positive_minutes(), Some(15));
        assert_eq!(SettingValue::from(" 45 ").as_positive_minutes(), Some(45));
        assert_eq!(SettingValue::Integer(0).as_positive_minutes(), None);
        assert_eq!(SettingValue::Integer(-5).as_positive_minutes(), None);
        assert_eq!(SettingValue::from("").as_positive_minutes(), None);
        assert_eq!(SettingValue::from("soon").as_positive_minutes(), None);
    }

    #[test]
    fn test_value_serialization_is_untagged() {
        let json = serde_json::to_string(&SettingValue::Integer(40)).unwrap();
        assert_eq!(json, "40");
        let value: SettingValue = serde_json::from_str("\"18:30\"").unwrap();
        assert_eq!(value, SettingValue::Text("18:30".to_string()));
    }

    #[test]
    fn test_value_from_json_scalars() {
        use serde_json::json;

        assert_eq!(SettingValue::from_json(json!(40)), Some(SettingValue::Integer(40)));
        assert_eq!(SettingValue::from_json(json!("7:30")), Some(SettingValue::from("7:30")));
        assert_eq!(SettingValue::from_json(json!(85.5)), Some(SettingValue::from("85.5")));
        assert_eq!(SettingValue::from_json(json!(true)), Some(SettingValue::from("true")));
        assert_eq!(SettingValue::from_json(json!(null)), None);
        assert_eq!(SettingValue::from_json(json!([1, 2])), None);
        assert_eq!(SettingValue::from_json(json!({ "a": 1 })), None);
    }

    #[test]
    fn test_load_reports_missing_key() {
        let store = MemoryStore::new();
        store.set("brightness_day", SettingValue::Integer(90)).unwrap();

        let err = FilterSettings::load(&store).unwrap_err();
        assert!(matches!(err, EyeFilterError::MissingSetting("sepia_day")));
    }

    #[test]
    fn test_app_config_resolves_relative_paths() {
        let config = AppConfig::default();
        let home = Path::new("/tmp/eyefilter-home");
        assert_eq!(
            config.settings_path(home),
            PathBuf::from("/tmp/eyefilter-home/settings.json")
        );
        assert_eq!(
            config.stylesheet_path(home),
            PathBuf::from("/tmp/eyefilter-home/eye-filter.css")
        );
    }

    #[test]
    fn test_app_config_partial_json_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"stylesheet_file": "/home/me/userContent.css"}"#).unwrap();
        assert_eq!(config.settings_file, PathBuf::from("settings.json"));
        assert_eq!(
            config.stylesheet_file,
            PathBuf::from("/home/me/userContent.css")
        );
    }
}
