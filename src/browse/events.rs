//! Event handling for the browser
//!
//! Maps crossterm key events to session state transitions. The mapping is a
//! pure function over [`SessionState`], so every binding is testable without
//! a terminal.

use super::session::{CommandKind, Mode, SessionState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// State changed, redraw the frame
    Redraw,
    /// Key not bound in the current mode
    Ignored,
}

/// Apply one key event to the session
pub fn handle_key(state: &mut SessionState, key: KeyEvent) -> EventOutcome {
    // Ctrl-C ends the session in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.quit();
        return EventOutcome::Redraw;
    }

    match state.mode {
        Mode::List => handle_list_mode(state, key),
        Mode::Command(_) => handle_command_mode(state, key),
    }
}

/// Keys while navigating the record list
fn handle_list_mode(state: &mut SessionState, key: KeyEvent) -> EventOutcome {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
            state.quit();
            EventOutcome::Redraw
        }

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            state.cursor_up();
            EventOutcome::Redraw
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            state.cursor_down();
            EventOutcome::Redraw
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventOutcome::Redraw
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventOutcome::Redraw
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventOutcome::Redraw
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventOutcome::Redraw
        }

        // Query commands, same letters as the CLI directives
        (KeyCode::Char('s'), KeyModifiers::NONE) => {
            state.begin_command(CommandKind::FuzzySearch);
            EventOutcome::Redraw
        }
        (KeyCode::Char('e'), KeyModifiers::NONE) => {
            state.begin_command(CommandKind::ExactSearch);
            EventOutcome::Redraw
        }
        (KeyCode::Char('o'), KeyModifiers::NONE) => {
            state.begin_command(CommandKind::SortAscending);
            EventOutcome::Redraw
        }
        (KeyCode::Char('r'), KeyModifiers::NONE) => {
            state.begin_command(CommandKind::SortDescending);
            EventOutcome::Redraw
        }
        (KeyCode::Char('a'), KeyModifiers::NONE) => {
            state.reset();
            EventOutcome::Redraw
        }

        _ => EventOutcome::Ignored,
    }
}

/// Keys while typing into the command prompt
fn handle_command_mode(state: &mut SessionState, key: KeyEvent) -> EventOutcome {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => {
            state.submit_command();
            EventOutcome::Redraw
        }
        (KeyCode::Esc, _) => {
            state.cancel_command();
            EventOutcome::Redraw
        }
        (KeyCode::Backspace, _) => {
            state.input_backspace();
            EventOutcome::Redraw
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.input_push(c);
            EventOutcome::Redraw
        }
        _ => EventOutcome::Ignored,
    }
}
