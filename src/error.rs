//! Error types for `eyefilter`
//!
//! This module defines all error types used throughout the crate,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains for better
//! observability and debugging.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `eyefilter`
#[derive(Debug, Error)]
pub enum EyeFilterError {
    /// A setting that must exist after initialization is absent from the store
    #[error("Setting '{0}' is missing from the settings store")]
    MissingSetting(&'static str),

    /// A day boundary could not be parsed as `H:MM`
    #[error("Invalid time of day for '{key}': {value:?}")]
    InvalidTimeOfDay {
        /// Settings key holding the malformed value
        key: &'static str,
        /// The raw value as stored
        value: String,
    },

    /// Reading or writing the settings store failed
    /// Preserves the underlying error source for full error chain transparency
    #[error("Settings store error: {0}")]
    StoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Writing the generated style rule failed
    /// Preserves the underlying error source for full error chain transparency
    #[error("Failed to write page style: {0}")]
    StyleOutputError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The auto-update timer thread could not be spawned
    #[error("Failed to start auto-update timer: {0}")]
    TimerSpawnFailed(#[source] std::io::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for `eyefilter` operations
pub type Result<T> = std::result::Result<T, EyeFilterError>;

/// Convert an error to a user-friendly message
///
/// Returns a message suitable for printing to the terminal host, including
/// a hint on how to recover.
pub fn get_user_friendly_error(error: &EyeFilterError) -> String {
    match error {
        EyeFilterError::MissingSetting(key) => {
            format!(
                "The setting '{key}' is missing.\n\n\
                 Restart eyefilter to restore the default value."
            )
        }
        EyeFilterError::InvalidTimeOfDay { key, value } => {
            format!(
                "The value {value:?} for '{key}' is not a time of day.\n\n\
                 Open the filter settings and enter the time as HH:MM (for example 7:30)."
            )
        }
        EyeFilterError::StoreError(_) => "Failed to read or write filter settings.\n\n\
             Your changes may not persist.\n\
             Check that the settings file is writable."
            .to_string(),
        EyeFilterError::StyleOutputError(_) => "Failed to update the page filter.\n\n\
             Check that the stylesheet path in config.json is writable."
            .to_string(),
        EyeFilterError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Your settings may not persist.\n\
             Check that you have write permissions to the eyefilter directory."
            .to_string(),
        EyeFilterError::TimerSpawnFailed(e) => {
            format!(
                "Automatic updates could not be started:\n\n{e}\n\n\
                 Use the \"update now\" command to refresh the filter manually."
            )
        }
        EyeFilterError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        EyeFilterError::JsonError(e) => {
            format!(
                "A settings file is corrupted:\n\n{e}\n\n\
                 Default values will be used."
            )
        }
    }
}
