//! Read-only preference store
//!
//! Preferences live in `~/.config/vwatch/config.yaml` and are addressed by
//! dot-path keys such as `color.background` or `keymap.toggle_timemachine`:
//!
//! ```yaml
//! general:
//!   shell: bash
//! color:
//!   background: "#1e1e1e"
//! keymap:
//!   timemachine_go_to_past: ["Shift-J", "Down"]
//! ```

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{ConfigError, Result};

/// A value looked up from the store, as the keymap resolver sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefValue {
    /// Key not present (or present but unusable)
    Absent,
    /// A single scalar, stringified
    Scalar(String),
    /// A sequence of scalars, stringified
    List(Vec<String>),
}

/// Immutable snapshot of the user's preferences
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    root: Mapping,
}

impl Preferences {
    /// An empty store: every lookup is `Absent`
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load preferences from the default config file, or an empty store if none exists
    pub fn load() -> Result<Self> {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using empty preferences");
            return Ok(Self::empty());
        };

        if !path.exists() {
            tracing::debug!(
                "Preference file not found at {}, using empty preferences",
                path.display()
            );
            return Ok(Self::empty());
        }

        Self::load_from(&path)
    }

    /// Load preferences from a specific YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Preferences {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let prefs = Self::from_yaml(&content).map_err(|e| ConfigError::Preferences {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::info!("Loaded preferences from {}", path.display());
        Ok(prefs)
    }

    /// Parse preferences from a YAML string
    ///
    /// An empty document is an empty store. The top level must otherwise be a mapping.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let value: Value = serde_yaml::from_str(yaml)?;
        let root = match value {
            Value::Null => Mapping::new(),
            other => serde_yaml::from_value(other)?,
        };
        Ok(Self { root })
    }

    /// Look up a dot-path key, e.g. `keymap.timemachine_go_to_past`
    pub fn get(&self, key: &str) -> PrefValue {
        match self.lookup(key) {
            None | Some(Value::Null) => PrefValue::Absent,
            Some(Value::Sequence(items)) => {
                let strings: Option<Vec<String>> = items.iter().map(scalar_to_string).collect();
                match strings {
                    Some(list) => PrefValue::List(list),
                    None => {
                        tracing::warn!("Preference {key} contains non-scalar list items, ignoring");
                        PrefValue::Absent
                    }
                }
            }
            Some(value) => match scalar_to_string(value) {
                Some(s) => PrefValue::Scalar(s),
                None => {
                    tracing::warn!("Preference {key} is not a scalar or a list, ignoring");
                    PrefValue::Absent
                }
            },
        }
    }

    /// Look up a key as a string; lists and missing keys yield `None`
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.get(key) {
            PrefValue::Scalar(s) => Some(s),
            PrefValue::Absent | PrefValue::List(_) => None,
        }
    }

    /// Look up a key as a boolean (`true`/`false`, `1`/`0`)
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.lookup(key)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_i64().map(|n| n != 0),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => {
                    tracing::warn!("Preference {key} is not a boolean: {s:?}");
                    None
                }
            },
            _ => None,
        }
    }

    /// Walk nested mappings along the dot path.
    ///
    /// A flat key that literally contains the dots is checked first.
    fn lookup(&self, key: &str) -> Option<&Value> {
        if let Some(value) = self.root.get(key) {
            return Some(value);
        }

        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut current = self.root.get(first)?;
        for segment in segments {
            current = current.as_mapping()?.get(segment)?;
        }
        Some(current)
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
