//! Chord-string parsing
//!
//! Grammar, left to right, each prefix optional and case-sensitive:
//!
//! ```text
//! ["Ctrl-"] ["Alt-"] ["Shift-"] (named-key | character)
//! ```
//!
//! A character remainder keeps only its first character. Without `Shift-`
//! it is folded to lower case; with `Shift-` it is folded to upper case and
//! no shift modifier is recorded. Named keys keep an explicit shift bit.

use crate::error::{ConfigError, Result};

use super::types::{KeyCode, Keystroke, Modifiers};

/// Parse a chord string like `"Ctrl-C"`, `"Shift-Tab"` or `"j"` into a Keystroke
pub fn parse_keystroke(chord: &str) -> Result<Keystroke> {
    let malformed = || ConfigError::MalformedKeyStroke(chord.to_string());

    let mut rest = chord;
    let mut mods = Modifiers::NONE;

    if let Some(stripped) = rest.strip_prefix("Ctrl-") {
        mods |= Modifiers::CTRL;
        rest = stripped;
    }

    if let Some(stripped) = rest.strip_prefix("Alt-") {
        mods |= Modifiers::ALT;
        rest = stripped;
    }

    if let Some(stripped) = rest.strip_prefix("Shift-") {
        if let Some(code) = KeyCode::from_name(stripped) {
            return Ok(Keystroke::new(code, mods | Modifiers::SHIFT));
        }

        let c = first_char(stripped).ok_or_else(malformed)?;
        return Ok(Keystroke::new(KeyCode::Char(fold_upper(c)), mods));
    }

    if let Some(code) = KeyCode::from_name(rest) {
        return Ok(Keystroke::new(code, mods));
    }

    let c = first_char(rest).ok_or_else(malformed)?;
    Ok(Keystroke::new(KeyCode::Char(fold_lower(c)), mods))
}

fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

/// Single-character case mappings; a character whose mapping expands to
/// several characters (`ß` upper-cases to `SS`) is kept as is
fn fold_upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

fn fold_lower(c: char) -> char {
    single(c.to_lowercase()).unwrap_or(c)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
