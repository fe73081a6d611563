mod common;

use common::prefs;
use vwatch::{Color, ConfigError, ThemeConfig};

#[test]
fn test_color_from_hex() {
    let color = Color::from_hex("#1E1E1E").unwrap();
    assert_eq!(color, Color::Rgb(0x1E, 0x1E, 0x1E));
}

#[test]
fn test_unresolvable_color_is_not_fatal() {
    assert!(matches!(
        Color::parse("bluish"),
        Err(ConfigError::UnresolvableColor(_))
    ));
    assert_eq!(Color::resolve("bluish"), Color::Default);
}

#[test]
fn test_empty_preferences_give_default_theme() {
    let theme = ThemeConfig::from_preferences(&prefs(""));
    assert_eq!(theme, ThemeConfig::default());
    assert_eq!(theme.background, Color::Default);
}

#[test]
fn test_all_slots_resolve() {
    let theme = ThemeConfig::from_preferences(&prefs(
        r##"
color:
  background: black
  contrast_background: "#202020"
  more_contrast_background: "#303030"
  border: gray
  title: white
  graphics: teal
  text: silver
  secondary_text: yellow
  tertiary_text: green
  inverse_text: navy
  contrast_secondary_text: "#ABCDEF"
"##,
    ));

    assert_eq!(theme.background, Color::rgb(0, 0, 0));
    assert_eq!(theme.contrast_background, Color::rgb(0x20, 0x20, 0x20));
    assert_eq!(theme.more_contrast_background, Color::rgb(0x30, 0x30, 0x30));
    assert_eq!(theme.border, Color::rgb(0x80, 0x80, 0x80));
    assert_eq!(theme.title, Color::rgb(0xFF, 0xFF, 0xFF));
    assert_eq!(theme.graphics, Color::rgb(0x00, 0x80, 0x80));
    assert_eq!(theme.text, Color::rgb(0xC0, 0xC0, 0xC0));
    assert_eq!(theme.secondary_text, Color::rgb(0xFF, 0xFF, 0x00));
    assert_eq!(theme.tertiary_text, Color::rgb(0x00, 0x80, 0x00));
    assert_eq!(theme.inverse_text, Color::rgb(0x00, 0x00, 0x80));
    assert_eq!(theme.contrast_secondary_text, Color::rgb(0xAB, 0xCD, 0xEF));
}

#[test]
fn test_bad_slot_does_not_affect_others() {
    let theme = ThemeConfig::from_preferences(&prefs(
        "color:\n  border: \"#12345\"\n  title: red\n",
    ));
    assert_eq!(theme.border, Color::Default);
    assert_eq!(theme.title, Color::rgb(0xFF, 0x00, 0x00));
}

#[test]
fn test_extended_color_names_resolve() {
    let theme = ThemeConfig::from_preferences(&prefs(
        "color:\n  background: darkslateblue\n  title: LightYellow\n  text: orchid\n",
    ));
    assert_eq!(theme.background, Color::rgb(0x48, 0x3D, 0x8B));
    assert_eq!(theme.title, Color::rgb(0xFF, 0xFF, 0xE0));
    assert_eq!(theme.text, Color::rgb(0xDA, 0x70, 0xD6));
}
