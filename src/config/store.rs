//! Persisted settings store
//!
//! The filter controller never touches a persistence backend directly. It reads
//! and writes through [`SettingsStore`], a flat string-keyed map of scalar values.

use crate::config::models::SettingValue;
use crate::error::{EyeFilterError, Result};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Key-value store holding the filter settings
pub trait SettingsStore: Send + Sync {
    /// Read a value, `None` if the key was never written
    fn get(&self, key: &str) -> Result<Option<SettingValue>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: SettingValue) -> Result<()>;
}

/// In-memory settings store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, SettingValue>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<SettingValue>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: SettingValue) -> Result<()> {
        self.values.lock().insert(key.to_string(), value);
        Ok(())
    }
}

/// Settings store backed by a flat JSON object on disk
///
/// The document is cached in memory; every `set` rewrites the whole file
/// through a temporary file in the same directory followed by a rename.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, SettingValue>>,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file yields an empty store. A file that cannot be parsed is
    /// logged and also treated as empty, so defaults get seeded again.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let values = if path.exists() {
            let json = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<BTreeMap<String, serde_json::Value>>(&json) {
                Ok(raw) => {
                    info!("Settings loaded from {}", path.display());
                    raw.into_iter()
                        .filter_map(|(key, value)| match SettingValue::from_json(value) {
                            Some(value) => Some((key, value)),
                            None => {
                                warn!("Ignoring setting '{}' with non-scalar value", key);
                                None
                            }
                        })
                        .collect()
                }
                Err(e) => {
                    warn!(
                        "Failed to parse settings file {}, starting empty: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            }
        } else {
            info!("Settings file {} not found, starting empty", path.display());
            BTreeMap::new()
        };

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    /// Location of the settings document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, SettingValue>) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(values)?;
        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(&self.path)
            .map_err(|e| EyeFilterError::StoreError(Box::new(e)))?;

        debug!("Settings written to {}", self.path.display());
        Ok(())
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<SettingValue>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: SettingValue) -> Result<()> {
        let mut values = self.values.lock();
        values.insert(key.to_string(), value);
        self.persist(&values)
    }
}
