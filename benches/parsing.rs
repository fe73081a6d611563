//! Benchmarks for startup configuration parsing
//!
//! Run with: cargo bench parsing

use vwatch::interval::parse_interval;
use vwatch::keymap::parse_keystroke;
use vwatch::{Config, Preferences};

fn main() {
    divan::main();
}

const PREFERENCES: &str = r##"
general:
  shell: bash
color:
  background: "#1e1e1e"
  title: navy
  text: silver
keymap:
  toggle_timemachine: ["Ctrl-T", " "]
  timemachine_go_to_past: ["Shift-J", "Down", "PgDn"]
  timemachine_go_to_future: ["Shift-K", "Up", "PgUp"]
"##;

// ============================================================================
// Intervals
// ============================================================================

#[divan::bench(args = ["2", "0.5", "1500ms", "1h2m3.5s", "250us"])]
fn interval(input: &str) {
    let _ = divan::black_box(parse_interval(divan::black_box(input)));
}

// ============================================================================
// Keystrokes
// ============================================================================

#[divan::bench(args = ["j", "Shift-J", "Ctrl-Alt-x", "Shift-Tab", "F12"])]
fn keystroke(chord: &str) {
    let _ = divan::black_box(parse_keystroke(divan::black_box(chord)));
}

// ============================================================================
// Full resolution
// ============================================================================

#[divan::bench]
fn preferences_from_yaml() -> Preferences {
    Preferences::from_yaml(divan::black_box(PREFERENCES)).unwrap_or_default()
}

#[divan::bench]
fn resolve_config(bencher: divan::Bencher) {
    let prefs = Preferences::from_yaml(PREFERENCES).unwrap_or_default();
    bencher.bench(|| {
        Config::resolve(
            divan::black_box(["-n", "500ms", "--precise", "ls", "-la"]),
            &prefs,
        )
    });
}
