//! vwatch - a visual watch
//!
//! This crate resolves the startup configuration of the watcher: command-line
//! flags, the user's preference file and built-in defaults are merged into one
//! immutable [`Config`] that the execution loop, history and renderer consume.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod interval;
pub mod keymap;
pub mod preferences;
pub mod run_mode;
pub mod theme;
pub mod tracing;

// Re-export commonly used types
pub use cli::CliArgs;
pub use config::{Config, GeneralConfig, RuntimeConfig};
pub use error::ConfigError;
pub use keymap::{Action, KeymapConfig, Keystroke};
pub use preferences::{PrefValue, Preferences};
pub use run_mode::RunMode;
pub use theme::{Color, ThemeConfig};
