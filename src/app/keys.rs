use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    // Global
    pub quit: String,
    pub toggle_keyhints: String,

    // Language filter
    pub filter_all: String,
    pub filter_english: String,
    pub filter_hindi: String,
    pub cycle_filter: String,

    // Navigation
    pub nav_up: String,
    pub nav_up_alt: String,
    pub nav_down: String,
    pub nav_down_alt: String,

    // Track actions
    pub open_youtube: String,
    pub open_spotify: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            toggle_keyhints: "?".to_string(),

            filter_all: "a".to_string(),
            filter_english: "e".to_string(),
            filter_hindi: "h".to_string(),
            cycle_filter: "Tab".to_string(),

            nav_up: "k".to_string(),
            nav_up_alt: "Up".to_string(),
            nav_down: "j".to_string(),
            nav_down_alt: "Down".to_string(),

            open_youtube: "y".to_string(),
            open_spotify: "s".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn matches(&self, event: KeyEvent, key_str: &str) -> bool {
        match key_str {
            "Space" => event.code == KeyCode::Char(' '),
            "Enter" => event.code == KeyCode::Enter,
            "Backspace" => event.code == KeyCode::Backspace,
            "Esc" => event.code == KeyCode::Esc,
            "Tab" => event.code == KeyCode::Tab,
            "BackTab" => event.code == KeyCode::BackTab,
            "Up" => event.code == KeyCode::Up,
            "Down" => event.code == KeyCode::Down,
            "Left" => event.code == KeyCode::Left,
            "Right" => event.code == KeyCode::Right,
            s if s.chars().count() == 1 => match s.chars().next() {
                // Uppercase bindings also accept shift + lowercase
                Some(ch) if ch.is_uppercase() => {
                    event.code == KeyCode::Char(ch)
                        || (event.code == KeyCode::Char(ch.to_ascii_lowercase())
                            && event.modifiers.contains(KeyModifiers::SHIFT))
                }
                Some(ch) => event.code == KeyCode::Char(ch),
                None => false,
            },
            _ => false,
        }
    }

    // Helper for UI display
    pub fn display(&self, key_str: &str) -> String {
        match key_str {
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "BackTab" => "S-Tab".to_string(),
            "Backspace" => "Bksp".to_string(),
            _ => key_str.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_named_and_char_keys() {
        let keys = KeyConfig::default();
        assert!(keys.matches(key(KeyCode::Tab), &keys.cycle_filter));
        assert!(keys.matches(key(KeyCode::Char('y')), &keys.open_youtube));
        assert!(!keys.matches(key(KeyCode::Char('Y')), &keys.open_youtube));
        assert!(keys.matches(key(KeyCode::Down), &keys.nav_down_alt));
    }

    #[test]
    fn test_uppercase_binding_accepts_shift() {
        let keys = KeyConfig::default();
        let shifted = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::SHIFT);
        assert!(keys.matches(shifted, "X"));
        assert!(!keys.matches(key(KeyCode::Char('x')), "X"));
    }

    #[test]
    fn test_partial_key_table() {
        let keys: KeyConfig = toml::from_str(r#"open_spotify = "p""#).unwrap();
        assert_eq!(keys.open_spotify, "p");
        assert_eq!(keys.quit, "q");
    }
}
