//! Settings store adapters
//!
//! `JsonSettingsStore` keeps settings in a JSON file, one file per profile,
//! in the platform config directory. Dotted keys map to nested objects, so
//! `input.device` lives at `{"input": {"device": ...}}`.
//!
//! `MemorySettingsStore` holds the same data in memory for tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::{IoConfigError, IoConfigResult};
use crate::ports::SettingsStore;

/// Subdirectory of the platform config dir holding the profiles
const APP_DIR: &str = "sdrconf";

/// Profile used when none is given
pub const DEFAULT_PROFILE: &str = "default";

/// Longest accepted profile name
const MAX_PROFILE_LEN: usize = 64;

/// Check a profile name before it becomes a file name.
///
/// Profiles are plain file stems: ASCII letters, digits, `-` and `_`. Since
/// neither `.` nor a path separator is allowed, a profile can never escape
/// the profile directory or pick its own extension.
pub fn profile_name(name: &str) -> IoConfigResult<&str> {
    let name = name.trim();
    if name.is_empty() || name.len() > MAX_PROFILE_LEN {
        return Err(IoConfigError::Config(format!(
            "Profile name must be 1 to {MAX_PROFILE_LEN} characters"
        )));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(IoConfigError::Config(format!(
            "Profile name '{name}' contains '{bad}'"
        )));
    }
    Ok(name)
}

/// Path of the settings file for `profile` in the platform config directory.
pub fn profile_path(profile: &str) -> IoConfigResult<PathBuf> {
    let name = profile_name(profile)?;
    let base = dirs::config_dir()
        .ok_or_else(|| IoConfigError::Config("No config directory on this platform".into()))?;
    Ok(base.join(APP_DIR).join(format!("{name}.json")))
}

/// Settings persisted as a JSON document. Every write goes straight to disk.
#[derive(Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
    root: Map<String, Value>,
}

impl JsonSettingsStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> IoConfigResult<Self> {
        let path = path.as_ref().to_path_buf();
        let root = if path.exists() {
            let json = std::fs::read_to_string(&path).map_err(|e| {
                IoConfigError::Settings(format!("Failed to read {}: {e}", path.display()))
            })?;
            match serde_json::from_str(&json) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(IoConfigError::Settings(format!(
                        "{} does not contain a JSON object",
                        path.display()
                    )))
                }
                Err(e) => {
                    return Err(IoConfigError::Settings(format!(
                        "Failed to parse {}: {e}",
                        path.display()
                    )))
                }
            }
        } else {
            log::debug!("No settings at {}, starting empty", path.display());
            Map::new()
        };
        Ok(Self { path, root })
    }

    /// Open the named profile in the platform config directory.
    pub fn open_profile(profile: &str) -> IoConfigResult<Self> {
        Self::open(profile_path(profile)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let mut value = self.root.get(parts.next()?)?;
        for part in parts {
            value = value.as_object()?.get(part)?;
        }
        Some(value)
    }

    fn write(&self, root: &Map<String, Value>) -> IoConfigResult<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| {
                IoConfigError::Settings(format!("Failed to create {}: {e}", dir.display()))
            })?;
        }
        let json = serde_json::to_string_pretty(root)
            .map_err(|e| IoConfigError::Settings(format!("Serialization error: {e}")))?;
        std::fs::write(&self.path, json).map_err(|e| {
            IoConfigError::Settings(format!("Failed to write {}: {e}", self.path.display()))
        })
    }
}

impl SettingsStore for JsonSettingsStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.lookup(key).and_then(value_as_string)
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.lookup(key).and_then(value_as_int)
    }

    /// The in-memory copy only changes once the file has been written, so a
    /// failed write leaves the store as it was.
    fn set_string(&mut self, key: &str, value: &str) -> IoConfigResult<()> {
        let mut parts: Vec<&str> = key.split('.').collect();
        let leaf = parts
            .pop()
            .filter(|leaf| !leaf.is_empty())
            .ok_or_else(|| IoConfigError::Settings(format!("Invalid settings key '{key}'")))?;

        let mut root = self.root.clone();
        let mut section = &mut root;
        for part in parts {
            let entry = section
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            section = entry.as_object_mut().ok_or_else(|| {
                IoConfigError::Settings(format!("Settings section '{part}' is not an object"))
            })?;
        }
        section.insert(leaf.to_string(), Value::String(value.to_string()));

        self.write(&root)?;
        self.root = root;
        Ok(())
    }
}

/// In-memory settings, keyed by the full dotted key.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, Value>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_string(mut self, key: &str, value: &str) -> Self {
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    pub fn with_int(mut self, key: &str, value: i64) -> Self {
        self.values.insert(key.to_string(), Value::from(value));
        self
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).and_then(value_as_string)
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(value_as_int)
    }

    fn set_string(&mut self, key: &str, value: &str) -> IoConfigResult<()> {
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
        Ok(())
    }
}

/// Scalars read as their text form; objects, arrays and null do not.
fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
