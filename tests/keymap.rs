//! Keystroke grammar and keymap resolution tests

mod common;

use common::{keyset, prefs};
use vwatch::keymap::{parse_keystroke, Action, KeyCode, KeymapConfig, Keystroke, Modifiers};
use vwatch::ConfigError;

// ========================================================================
// Chord Grammar Tests
// ========================================================================

#[test]
fn test_case_folds_without_shift() {
    for c in 'a'..='z' {
        let lower = c.to_string();
        let upper = c.to_ascii_uppercase().to_string();
        assert_eq!(
            parse_keystroke(&upper).unwrap(),
            parse_keystroke(&lower).unwrap(),
            "{upper} and {lower} should be the same keystroke"
        );
    }
}

#[test]
fn test_shift_letter_is_uppercase_char() {
    let stroke = parse_keystroke("Shift-j").unwrap();
    assert_eq!(stroke.key, KeyCode::Char('J'));
    assert_eq!(stroke.as_char(), Some('J'));
    assert!(stroke.mods.is_empty());
}

#[test]
fn test_ctrl_c() {
    let stroke = parse_keystroke("Ctrl-C").unwrap();
    assert!(stroke.mods.ctrl());
    assert_eq!(stroke.key, KeyCode::Char('c'));
}

#[test]
fn test_shift_named_key_differs_from_plain() {
    assert_ne!(
        parse_keystroke("Shift-Tab").unwrap(),
        parse_keystroke("Tab").unwrap()
    );
    assert_eq!(
        parse_keystroke("Shift-Tab").unwrap(),
        Keystroke::new(KeyCode::Tab, Modifiers::SHIFT)
    );
}

#[test]
fn test_empty_chord() {
    assert!(matches!(
        parse_keystroke(""),
        Err(ConfigError::MalformedKeyStroke(_))
    ));
}

// ========================================================================
// Keymap Resolution Tests
// ========================================================================

#[test]
fn test_defaults_when_nothing_stored() {
    let keymap = KeymapConfig::from_preferences(&prefs(""));
    assert_eq!(keymap.toggle_time_machine, keyset(&[" "]));
    assert_eq!(keymap.go_to_past, keyset(&["Shift-J"]));
    assert_eq!(keymap.go_to_future, keyset(&["Shift-K"]));
    assert_eq!(keymap.go_to_more_past, keyset(&["Shift-F"]));
    assert_eq!(keymap.go_to_more_future, keyset(&["Shift-B"]));
    assert_eq!(keymap.go_to_now, keyset(&["Shift-N"]));
    assert_eq!(keymap.go_to_oldest, keyset(&["Shift-O"]));
}

#[test]
fn test_malformed_list_falls_back_to_default_set() {
    let keymap = KeymapConfig::from_preferences(&prefs(
        "keymap:\n  timemachine_go_to_more_past: [\"Ctrl-f\", \"Alt-\"]\n",
    ));
    assert_eq!(keymap.go_to_more_past, keyset(&["Shift-F"]));
    assert!(!keymap
        .go_to_more_past
        .contains(&parse_keystroke("Ctrl-f").unwrap()));
}

#[test]
fn test_single_string_binding() {
    let keymap = KeymapConfig::from_preferences(&prefs("keymap:\n  timemachine_go_to_now: End\n"));
    assert_eq!(keymap.go_to_now, keyset(&["End"]));
    assert_eq!(
        keymap.action_for(&Keystroke::key(KeyCode::End)),
        Some(Action::GoToNow)
    );
}

#[test]
fn test_non_string_list_items_fall_back() {
    let keymap =
        KeymapConfig::from_preferences(&prefs("keymap:\n  toggle_timemachine: [[\"a\"]]\n"));
    assert_eq!(keymap.toggle_time_machine, keyset(&[" "]));
}

#[test]
fn test_every_action_has_a_binding() {
    let keymap = KeymapConfig::from_preferences(&prefs(
        "keymap:\n  toggle_timemachine: []\n  timemachine_go_to_oldest: \"\"\n",
    ));
    for action in Action::ALL {
        assert!(
            !keymap.keys_for(action).is_empty(),
            "{action} should never be unbound"
        );
    }
}
