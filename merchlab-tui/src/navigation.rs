//! Keyboard navigation — maps key events to app actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Handle keyboard input and update app state.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Panel cycling
        KeyCode::Tab => app.active_panel = app.active_panel.next(),
        KeyCode::BackTab => app.active_panel = app.active_panel.prev(),

        // Cursor over bars/rows
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
            app.cursor_next()
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => {
            app.cursor_prev()
        }

        // Click gesture: mark, commit, clear
        KeyCode::Char(' ') => app.mark_current(),
        KeyCode::Enter => app.commit_click(),
        KeyCode::Esc => app.clear_selection(),

        // Interaction mode
        KeyCode::Char('m') | KeyCode::Char('M') => app.toggle_interaction_mode(),

        // Ranking
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_direction(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_count(1),
        KeyCode::Char('-') => app.adjust_count(-1),

        // Date window, one month at a time
        KeyCode::Char('[') => app.shift_start(-1),
        KeyCode::Char(']') => app.shift_start(1),
        KeyCode::Char('{') => app.shift_end(-1),
        KeyCode::Char('}') => app.shift_end(1),

        _ => {}
    }
}

/// Key bindings help text, rendered by the filter panel.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q", "Quit"),
        ("Tab", "Next panel"),
        ("↑/↓ or j/k", "Move cursor"),
        ("Space", "Mark bar"),
        ("Enter", "Click (commit marks)"),
        ("Esc", "Clear selection"),
        ("m", "Toggle single/multi click"),
        ("t", "Toggle top/bottom"),
        ("+/-", "Adjust N"),
        ("[ ]", "Shift start month"),
        ("{ }", "Shift end month"),
    ]
}
