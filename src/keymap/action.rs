//! Time machine actions that can be bound to keys

use std::fmt;

use serde::Serialize;

use super::types::{KeyCode, Keystroke, Modifiers};

/// Every bindable action
///
/// The set is closed: the preference store can rebind these but not add new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Enter or leave time machine mode
    ToggleTimeMachine,
    /// Step one snapshot back
    GoToPast,
    /// Step one snapshot forward
    GoToFuture,
    /// Step several snapshots back
    GoToMorePast,
    /// Step several snapshots forward
    GoToMoreFuture,
    /// Jump to the latest snapshot
    GoToNow,
    /// Jump to the oldest snapshot
    GoToOldest,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::ToggleTimeMachine,
        Action::GoToPast,
        Action::GoToFuture,
        Action::GoToMorePast,
        Action::GoToMoreFuture,
        Action::GoToNow,
        Action::GoToOldest,
    ];

    /// Name used in preference keys and logs
    pub fn name(self) -> &'static str {
        match self {
            Action::ToggleTimeMachine => "toggle_timemachine",
            Action::GoToPast => "timemachine_go_to_past",
            Action::GoToFuture => "timemachine_go_to_future",
            Action::GoToMorePast => "timemachine_go_to_more_past",
            Action::GoToMoreFuture => "timemachine_go_to_more_future",
            Action::GoToNow => "timemachine_go_to_now",
            Action::GoToOldest => "timemachine_go_to_oldest",
        }
    }

    /// Dot-path key in the preference store, e.g. `keymap.toggle_timemachine`
    pub fn preference_key(self) -> String {
        format!("keymap.{}", self.name())
    }

    /// Built-in binding used when the preference is absent or malformed
    ///
    /// Equivalent to the chord strings `" "`, `"Shift-J"`, `"Shift-K"`,
    /// `"Shift-F"`, `"Shift-B"`, `"Shift-N"` and `"Shift-O"`.
    pub const fn default_keystroke(self) -> Keystroke {
        let c = match self {
            Action::ToggleTimeMachine => ' ',
            Action::GoToPast => 'J',
            Action::GoToFuture => 'K',
            Action::GoToMorePast => 'F',
            Action::GoToMoreFuture => 'B',
            Action::GoToNow => 'N',
            Action::GoToOldest => 'O',
        };
        Keystroke::new(KeyCode::Char(c), Modifiers::NONE)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
