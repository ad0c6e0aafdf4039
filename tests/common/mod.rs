//! Common test utilities and helpers

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cyberwatch_core::{App, DashboardConfig, SectionId};

/// App with default configuration opened on `section`
pub fn app_on(section: SectionId) -> App {
    App::new(&DashboardConfig::default()).with_section(section)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Feed a sequence of plain characters to the app
pub fn type_keys(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

/// Text of the content area title row for the current frame
pub fn content_heading(app: &App) -> String {
    let frame = app.snapshot(160, 40).expect("snapshot");
    frame.lines().nth(2).unwrap_or_default().to_string()
}
