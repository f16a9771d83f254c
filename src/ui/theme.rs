use crate::app::config::AppConfig;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,
    pub text: Color,
    /// Active toggle / highlight
    pub accent: Color,
    /// YouTube button
    pub red: Color,
    /// Spotify button
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(30, 27, 75),
            surface: Color::Rgb(59, 7, 100),
            overlay: Color::Rgb(148, 130, 190),
            text: Color::Rgb(237, 233, 254),
            accent: Color::Rgb(168, 85, 247),
            red: Color::Rgb(220, 38, 38),
            green: Color::Rgb(22, 163, 74),
            yellow: Color::Rgb(250, 204, 21),
            blue: Color::Rgb(129, 140, 248),
            magenta: Color::Rgb(216, 180, 254),
        }
    }
}

// Helper for serialization/deserialization
#[derive(Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

pub fn get_theme_path() -> std::path::PathBuf {
    AppConfig::get_config_dir().join("theme.toml")
}

pub fn load_current_theme() -> Theme {
    let path = get_theme_path();

    if !path.exists() {
        // Auto-create so users have something to edit
        let default_theme = Theme::default();
        let wrapper = ThemeFile {
            theme: default_theme.clone(),
        };
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(toml_str) = toml::to_string_pretty(&wrapper) {
            let _ = fs::write(&path, toml_str);
        }
        return default_theme;
    }

    match fs::read_to_string(&path) {
        Ok(content) => parse_theme(&content).unwrap_or_else(|| {
            warn!(path = %path.display(), "Unreadable theme, using default");
            Theme::default()
        }),
        Err(_) => Theme::default(),
    }
}

/// Accepts the nested `[theme]` form as well as a flat file
pub fn parse_theme(content: &str) -> Option<Theme> {
    if let Ok(wrapper) = toml::from_str::<ThemeFile>(content) {
        return Some(wrapper.theme);
    }
    toml::from_str::<Theme>(content).ok()
}
