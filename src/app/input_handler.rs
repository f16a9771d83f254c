use crate::app::App;
use crate::links::{LinkKind, LinkOpener};
use crate::recommend::LanguageFilter;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(key: KeyEvent, app: &mut App, opener: &dyn LinkOpener) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    let keys = app.keys.clone();

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.is_running = false;
        return;
    }

    // Quit ('q') - close popups first
    if keys.matches(key, &keys.quit) || (app.show_keyhints && key.code == KeyCode::Esc) {
        if app.show_keyhints {
            app.show_keyhints = false;
        } else {
            app.is_running = false;
        }
        return;
    }

    if keys.matches(key, &keys.toggle_keyhints) {
        app.show_keyhints = !app.show_keyhints;
        return;
    }

    // Language toggles
    if keys.matches(key, &keys.filter_all) {
        app.set_filter(LanguageFilter::All);
        return;
    }
    if keys.matches(key, &keys.filter_english) {
        app.set_filter(LanguageFilter::English);
        return;
    }
    if keys.matches(key, &keys.filter_hindi) {
        app.set_filter(LanguageFilter::Hindi);
        return;
    }
    if keys.matches(key, &keys.cycle_filter) {
        app.cycle_filter();
        return;
    }

    // Track list navigation
    if keys.matches(key, &keys.nav_down) || keys.matches(key, &keys.nav_down_alt) {
        app.select_next();
        return;
    }
    if keys.matches(key, &keys.nav_up) || keys.matches(key, &keys.nav_up_alt) {
        app.select_prev();
        return;
    }

    // Track buttons
    if keys.matches(key, &keys.open_youtube) {
        app.open_selected(LinkKind::Video, opener);
        return;
    }
    if keys.matches(key, &keys.open_spotify) {
        app.open_selected(LinkKind::Audio, opener);
    }
}
