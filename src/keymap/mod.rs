//! Configurable key bindings for the time machine
//!
//! This module:
//! - Parses human-readable chord strings (`"Ctrl-C"`, `"Shift-Tab"`) into keystrokes
//! - Resolves each time machine action's stored binding into a keystroke set
//! - Falls back to a built-in binding per action when the stored value is unusable
//!
//! # Architecture
//!
//! ```text
//! Preferences → PrefValue → parse_keystroke() → KeySet → KeymapConfig
//! ```

mod action;
mod config;
mod parser;
mod types;

pub use action::Action;
pub use config::{keyset_or_default, parse_keyset, KeySet, KeymapConfig};
pub use parser::parse_keystroke;
pub use types::{KeyCode, Keystroke, Modifiers, MAX_FUNCTION_KEY};
