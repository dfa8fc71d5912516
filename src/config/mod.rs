//! Configuration management module
//!
//! This module holds the seven filter settings, the key-value store they are
//! persisted in, and the host configuration of the `eyefilter` binary.
//! Everything lives under the eyefilter home directory (`EYEFILTER_HOME`, or the
//! platform config directory) and is written atomically to prevent corruption.

pub mod manager;
pub mod models;
pub mod store;

pub use manager::ConfigManager;
pub use models::{
    AppConfig, DEFAULT_UPDATE_INTERVAL_MINUTES, FilterSettings, SettingKey, SettingValue,
};
pub use store::{JsonFileStore, MemoryStore, SettingsStore};
