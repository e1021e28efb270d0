//! Browse module - interactive record browsing
//!
//! Owns the browser session state machine and its terminal frontend. The
//! state layer (`session`) is UI-agnostic and fully testable without a
//! terminal; `events` maps crossterm key events onto state transitions and
//! `ui` renders with ratatui inside a scoped terminal acquisition.
//!
//! # Architecture
//!
//! - `session`: session state (full/view collections, cursor, phase)
//! - `events`: key event -> state transition mapping
//! - `ui`: terminal guard, blocking event loop, widgets
//! - `theme`: style palette

pub mod events;
pub mod session;
pub mod theme;
pub mod ui;

pub use session::{CommandKind, Mode, SessionPhase, SessionState};
pub use theme::Theme;
pub use ui::run_session;

/// Errors from the terminal frontend
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
