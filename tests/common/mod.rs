//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mdpeek::browser::Browser;
use mdpeek::ui::app::Settings;
use mdpeek::ui::events::AppEvent;
use mdpeek::ui::App;
use std::fs;
use tempfile::TempDir;

/// Helper to create a key event
pub fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

/// A directory holding `a.md` (ten numbered lines) and `b.txt`.
///
/// Listing order is `a.md`, `b.txt`.
pub fn notes_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let body: String = (1..=10).map(|i| format!("line {i}\n")).collect();
    fs::write(temp_dir.path().join("a.md"), body).unwrap();
    fs::write(temp_dir.path().join("b.txt"), "plain text\n").unwrap();
    temp_dir
}

pub fn create_test_app(dir: &TempDir) -> App {
    let browser = Browser::new(dir.path(), vec!["md".to_string()], false).unwrap();
    App::new(browser, &Settings::default())
}

/// Terminal height giving `lines` visible lines with the default padding of 5.
pub fn height_for(lines: u16) -> u16 {
    lines + 10
}

/// Move the cursor onto `b.txt` and press Enter.
pub fn select_txt(app: &mut App) -> Vec<mdpeek::ui::events::Effect> {
    app.update(key(KeyCode::End));
    app.update(key(KeyCode::Enter))
}

/// Move the cursor onto `a.md` and press Enter.
pub fn select_md(app: &mut App) -> Vec<mdpeek::ui::events::Effect> {
    app.update(key(KeyCode::Home));
    app.update(key(KeyCode::Enter))
}
