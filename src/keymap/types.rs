//! Core types for the keymap system: Keystroke, Modifiers, KeyCode

use std::fmt;

use serde::{Serialize, Serializer};

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);

    /// Check if ctrl is held
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    /// Check if alt is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

/// A key code: either a named key or a single character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key, case preserved (`'J'` is shift+j)
    Char(char),

    Enter,
    Backspace,
    Tab,
    Backtab,
    Esc,
    Delete,
    Insert,

    Up,
    Down,
    Left,
    Right,

    Home,
    End,
    PgUp,
    PgDn,

    Clear,
    Cancel,
    Print,
    Pause,
    Help,

    /// F1-F64
    F(u8),
}

/// Named keys and their chord-string spelling (function keys are handled separately)
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("Enter", KeyCode::Enter),
    ("Backspace", KeyCode::Backspace),
    ("Tab", KeyCode::Tab),
    ("Backtab", KeyCode::Backtab),
    ("Esc", KeyCode::Esc),
    ("Delete", KeyCode::Delete),
    ("Insert", KeyCode::Insert),
    ("Up", KeyCode::Up),
    ("Down", KeyCode::Down),
    ("Left", KeyCode::Left),
    ("Right", KeyCode::Right),
    ("Home", KeyCode::Home),
    ("End", KeyCode::End),
    ("PgUp", KeyCode::PgUp),
    ("PgDn", KeyCode::PgDn),
    ("Clear", KeyCode::Clear),
    ("Cancel", KeyCode::Cancel),
    ("Print", KeyCode::Print),
    ("Pause", KeyCode::Pause),
    ("Help", KeyCode::Help),
];

/// Highest function key that has a name
pub const MAX_FUNCTION_KEY: u8 = 64;

impl KeyCode {
    /// Look up a named key by its exact, case-sensitive name (`"Tab"`, `"F12"`)
    pub fn from_name(name: &str) -> Option<KeyCode> {
        if let Some((_, code)) = NAMED_KEYS.iter().find(|(n, _)| *n == name) {
            return Some(*code);
        }

        let digits = name.strip_prefix('F')?;
        if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match digits.parse::<u8>() {
            Ok(n) if (1..=MAX_FUNCTION_KEY).contains(&n) => Some(KeyCode::F(n)),
            _ => None,
        }
    }

    /// The chord-string name of a named key; `None` for characters
    pub fn name(&self) -> Option<String> {
        match self {
            KeyCode::Char(_) => None,
            KeyCode::F(n) => Some(format!("F{}", n)),
            other => NAMED_KEYS
                .iter()
                .find(|(_, code)| code == other)
                .map(|(name, _)| name.to_string()),
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(' ') => write!(f, "Space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            other => write!(f, "{}", other.name().unwrap_or_default()),
        }
    }
}

/// A single keystroke: a key with modifiers
///
/// Shift is only recorded as a modifier on named keys; for characters it is
/// carried by the case of the character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    /// Create a new keystroke
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a keystroke with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    /// Create a character keystroke with no modifiers, case preserved
    pub const fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    /// The character carried by this keystroke, if it is not a named key
    pub fn as_char(&self) -> Option<char> {
        match self.key {
            KeyCode::Char(c) => Some(c),
            _ => None,
        }
    }
}

/// Formats as a chord string that parses back to the same keystroke,
/// e.g. `Ctrl-Alt-Shift-Tab` or `Shift-j` for `'J'`.
impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.ctrl() {
            write!(f, "Ctrl-")?;
        }
        if self.mods.alt() {
            write!(f, "Alt-")?;
        }

        match self.key {
            KeyCode::Char(c) => {
                let mut lower = c.to_lowercase();
                match (lower.next(), lower.next()) {
                    (Some(l), None) if l != c => write!(f, "Shift-{}", l),
                    _ => write!(f, "{}", c),
                }
            }
            key => {
                if self.mods.shift() {
                    write!(f, "Shift-")?;
                }
                write!(f, "{}", key)
            }
        }
    }
}

impl Serialize for Keystroke {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_empty() {
        let mods = Modifiers::NONE;
        assert!(mods.is_empty());
        assert!(!mods.ctrl());
        assert!(!mods.shift());
        assert!(!mods.alt());
    }

    #[test]
    fn test_modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::ALT;
        assert!(mods.ctrl());
        assert!(mods.alt());
        assert!(!mods.shift());
        assert!(mods.contains(Modifiers::CTRL));
        assert!(!mods.contains(Modifiers::SHIFT));
    }

    #[test]
    fn test_named_key_lookup_is_case_sensitive() {
        assert_eq!(KeyCode::from_name("Tab"), Some(KeyCode::Tab));
        assert_eq!(KeyCode::from_name("tab"), None);
        assert_eq!(KeyCode::from_name("PgDn"), Some(KeyCode::PgDn));
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(KeyCode::from_name("F1"), Some(KeyCode::F(1)));
        assert_eq!(KeyCode::from_name("F64"), Some(KeyCode::F(64)));
        assert_eq!(KeyCode::from_name("F65"), None);
        assert_eq!(KeyCode::from_name("F0"), None);
        assert_eq!(KeyCode::from_name("F01"), None);
        assert_eq!(KeyCode::from_name("F"), None);
        assert_eq!(KeyCode::from_name("F+1"), None);
    }

    #[test]
    fn test_keystroke_equality_uses_all_fields() {
        let plain = Keystroke::key(KeyCode::Tab);
        let shifted = Keystroke::new(KeyCode::Tab, Modifiers::SHIFT);
        assert_ne!(plain, shifted);
        assert_ne!(Keystroke::char('j'), Keystroke::char('J'));
    }

    #[test]
    fn test_keystroke_display() {
        assert_eq!(Keystroke::char('J').to_string(), "Shift-j");
        assert_eq!(
            Keystroke::new(KeyCode::Char('c'), Modifiers::CTRL).to_string(),
            "Ctrl-c"
        );
        assert_eq!(
            Keystroke::new(KeyCode::Tab, Modifiers::CTRL | Modifiers::SHIFT).to_string(),
            "Ctrl-Shift-Tab"
        );
        assert_eq!(Keystroke::key(KeyCode::F(5)).to_string(), "F5");
    }
}
