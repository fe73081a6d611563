//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;
use vwatch::keymap::{parse_keystroke, KeySet};
use vwatch::{Config, ConfigError, Preferences};

/// Build a preference store from inline YAML
pub fn prefs(yaml: &str) -> Preferences {
    Preferences::from_yaml(yaml).expect("test YAML should parse")
}

/// Resolve a configuration with the given arguments and preferences
pub fn resolve_with(args: &[&str], prefs: &Preferences) -> Result<Config, ConfigError> {
    Config::resolve(args.iter().copied(), prefs)
}

/// Resolve a configuration with no stored preferences
pub fn resolve(args: &[&str]) -> Result<Config, ConfigError> {
    resolve_with(args, &Preferences::empty())
}

/// Parse a list of chord strings into a keystroke set
pub fn keyset(chords: &[&str]) -> KeySet {
    chords
        .iter()
        .map(|chord| parse_keystroke(chord).expect("test chord should parse"))
        .collect()
}

/// Write YAML to a temporary preference file
pub fn preference_file(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(yaml.as_bytes()).expect("write temp file");
    file
}
