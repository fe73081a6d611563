//! Resolving keymap preferences into keystroke sets
//!
//! Each action reads one preference which may be absent, a single chord
//! string, or a list of chord strings:
//!
//! ```yaml
//! keymap:
//!   toggle_timemachine: "Ctrl-T"
//!   timemachine_go_to_past: ["Shift-J", "Down"]
//! ```
//!
//! A malformed entry never fails startup. The whole action falls back to its
//! default binding instead.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::Result;
use crate::preferences::{PrefValue, Preferences};

use super::action::Action;
use super::parser::parse_keystroke;
use super::types::Keystroke;

/// The set of keystrokes bound to one action
pub type KeySet = HashSet<Keystroke>;

/// Resolved key bindings for every time machine action
///
/// Every set is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeymapConfig {
    pub toggle_time_machine: KeySet,
    pub go_to_past: KeySet,
    pub go_to_future: KeySet,
    pub go_to_more_past: KeySet,
    pub go_to_more_future: KeySet,
    pub go_to_now: KeySet,
    pub go_to_oldest: KeySet,
}

impl KeymapConfig {
    /// Resolve every action from the preference store, defaulting per action
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let resolve = |action: Action| {
            let key = action.preference_key();
            let default = KeySet::from([action.default_keystroke()]);
            keyset_or_default(action, &prefs.get(&key), default)
        };

        Self {
            toggle_time_machine: resolve(Action::ToggleTimeMachine),
            go_to_past: resolve(Action::GoToPast),
            go_to_future: resolve(Action::GoToFuture),
            go_to_more_past: resolve(Action::GoToMorePast),
            go_to_more_future: resolve(Action::GoToMoreFuture),
            go_to_now: resolve(Action::GoToNow),
            go_to_oldest: resolve(Action::GoToOldest),
        }
    }

    /// Keystrokes bound to an action
    pub fn keys_for(&self, action: Action) -> &KeySet {
        match action {
            Action::ToggleTimeMachine => &self.toggle_time_machine,
            Action::GoToPast => &self.go_to_past,
            Action::GoToFuture => &self.go_to_future,
            Action::GoToMorePast => &self.go_to_more_past,
            Action::GoToMoreFuture => &self.go_to_more_future,
            Action::GoToNow => &self.go_to_now,
            Action::GoToOldest => &self.go_to_oldest,
        }
    }

    /// Find the action bound to a keystroke
    ///
    /// If the same keystroke is bound to several actions, the first in
    /// [`Action::ALL`] order wins.
    pub fn action_for(&self, keystroke: &Keystroke) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|action| self.keys_for(*action).contains(keystroke))
    }
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self::from_preferences(&Preferences::empty())
    }
}

/// Resolve one action's stored value, returning `default` when it is absent or malformed
pub fn keyset_or_default(action: Action, value: &PrefValue, default: KeySet) -> KeySet {
    match parse_keyset(value) {
        Ok(Some(keys)) => keys,
        Ok(None) => {
            tracing::debug!("No binding configured for {action}, using default");
            default
        }
        Err(e) => {
            tracing::warn!("Ignoring keymap for {action}: {e}");
            default
        }
    }
}

/// Parse a stored keymap value
///
/// `Ok(None)` means there is nothing to use (absent or an empty list). Any
/// malformed element fails the whole value.
pub fn parse_keyset(value: &PrefValue) -> Result<Option<KeySet>> {
    match value {
        PrefValue::Absent => Ok(None),
        PrefValue::Scalar(chord) => Ok(Some(KeySet::from([parse_keystroke(chord)?]))),
        PrefValue::List(chords) => {
            let keys = chords
                .iter()
                .map(|chord| parse_keystroke(chord))
                .collect::<Result<KeySet>>()?;
            Ok((!keys.is_empty()).then_some(keys))
        }
    }
}
