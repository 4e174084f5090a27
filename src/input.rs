use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::app::App;
use crate::oracle::Phase;

/// Handle terminal events
/// Returns true if the app should quit
pub async fn handle_events(app: &mut App) -> Result<bool> {
    // Poll for events with a timeout
    if event::poll(Duration::from_millis(100))?
        && let Event::Key(key) = event::read()?
    {
        // Only handle key press events (not release) - important for Windows
        if key.kind != KeyEventKind::Press {
            return Ok(app.should_quit());
        }

        // Handle Ctrl+C globally
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(true);
        }

        match app.phase() {
            Phase::AwaitingInput => handle_entry(app, key),
            Phase::Thinking => handle_thinking(app, key),
            Phase::Answer | Phase::Error => handle_result(app, key),
        }
    }

    Ok(app.should_quit())
}

fn handle_entry(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
        }
        // Submit; a no-op until all three digits are cast
        KeyCode::Enter => {
            app.seek();
        }
        KeyCode::Backspace => {
            app.backspace();
        }
        KeyCode::Left => {
            app.focus_left();
        }
        KeyCode::Right => {
            app.focus_right();
        }
        // Digit entry; anything else is silently dropped
        KeyCode::Char(c) => {
            app.enter_digit(c);
        }
        _ => {}
    }
}

fn handle_thinking(app: &mut App, key: KeyEvent) {
    // While a seek is in flight, only quitting is honored.
    if key.code == KeyCode::Char('q') {
        app.request_quit();
    }
}

fn handle_result(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
        }
        // Ask again with the same digits
        KeyCode::Enter => {
            app.seek();
        }
        // Back to digit entry
        KeyCode::Char('r') | KeyCode::Esc => {
            app.reset();
        }
        _ => {}
    }
}
