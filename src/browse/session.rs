//! Browser session state
//!
//! The session owns two collections: `full`, the baseline set once at load
//! time, and `view`, the currently filtered/sorted subset. Searches always
//! run over `full`; sorts refine the current `view`; reset restores `view`
//! to `full`. The cursor is clamped to the view and resets to the top after
//! every query operation.
//!
//! One event is processed to completion before the next is read, so nothing
//! here needs synchronization.

use crate::cli::QueryDirective;
use crate::query::Collection;
use crate::record::Record;

/// Lifecycle of a browsing session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Accepting input and rendering
    Browsing,
    /// Session over, terminal released
    Terminated,
}

/// Input mode within the browsing phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigating the record list
    List,
    /// Typing a query into the command prompt
    Command(CommandKind),
}

/// Which query the command prompt will run on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    FuzzySearch,
    ExactSearch,
    SortAscending,
    SortDescending,
}

impl CommandKind {
    /// Prompt text shown while typing
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::FuzzySearch => "fuzzy search (property term)",
            Self::ExactSearch => "exact search (property term)",
            Self::SortAscending => "sort by (property)",
            Self::SortDescending => "reverse sort by (property)",
        }
    }
}

/// Mutable state for one browsing session
#[derive(Debug)]
pub struct SessionState {
    /// Baseline collection, set once at load time
    pub full: Collection,
    /// Current view, possibly filtered/sorted
    pub view: Collection,
    /// Selected row, clamped to `[0, view.len()-1]`, 0 when empty
    pub cursor: usize,
    /// First visible row of the list window
    pub scroll_offset: usize,
    /// Height of the visible list area (set during render)
    pub visible_height: usize,
    /// Kind scope label for the title bar ("notes", "all", ...)
    pub scope_label: String,
    /// Human-readable description of the active filter/sort chain
    pub filter_desc: Option<String>,
    /// Session lifecycle
    pub phase: SessionPhase,
    /// Input mode
    pub mode: Mode,
    /// Command prompt buffer
    pub input: String,
}

impl SessionState {
    /// Create a session over a loaded collection
    #[must_use]
    pub fn new(full: Collection, scope_label: impl Into<String>) -> Self {
        Self {
            view: full.clone(),
            full,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 20, // default, updated during render
            scope_label: scope_label.into(),
            filter_desc: None,
            phase: SessionPhase::Browsing,
            mode: Mode::List,
            input: String::new(),
        }
    }

    /// The record under the cursor
    #[must_use]
    pub fn current(&self) -> Option<&Record> {
        self.view.get(self.cursor)
    }

    /// Move cursor up one row, clamped (no wraparound)
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down one row, clamped (no wraparound)
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.view.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self) {
        let max_cursor = self.view.len().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    /// Jump to the first row
    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to the last row
    pub fn jump_to_end(&mut self) {
        self.cursor = self.view.len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Keep the cursor row inside the visible window
    fn adjust_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.visible_height > 0
            && self.cursor >= self.scroll_offset + self.visible_height
        {
            self.scroll_offset = self.cursor.saturating_sub(self.visible_height - 1);
        }
    }

    /// Apply an already-parsed query directive
    ///
    /// Searches run over the full baseline; sorts refine the current view.
    /// The cursor resets to the top either way. Used both for the CLI-level
    /// directive at session start and for submitted prompt commands.
    pub fn apply_directive(&mut self, directive: &QueryDirective) {
        match directive {
            QueryDirective::Fuzzy { property, term } => {
                self.view = self.full.fuzzy_search(property, term);
                self.filter_desc = Some(format!("s {property} {term}"));
            }
            QueryDirective::Exact { property, term } => {
                self.view = self.full.exact_search(property, term);
                self.filter_desc = Some(format!("es {property} {term}"));
            }
            QueryDirective::Sort { property, reverse } => {
                self.view = self.view.sorted_by(property, *reverse);
                let letter = if *reverse { 'r' } else { 'o' };
                self.filter_desc = Some(format!("{letter} {property}"));
            }
        }
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Reset the view to the full baseline
    pub fn reset(&mut self) {
        self.view = self.full.clone();
        self.filter_desc = None;
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// End the session
    pub fn quit(&mut self) {
        self.phase = SessionPhase::Terminated;
    }

    /// Open the command prompt for a query kind
    pub fn begin_command(&mut self, kind: CommandKind) {
        self.input.clear();
        self.mode = Mode::Command(kind);
    }

    /// Close the command prompt without applying anything
    pub fn cancel_command(&mut self) {
        self.input.clear();
        self.mode = Mode::List;
    }

    /// Append a character to the prompt buffer
    pub fn input_push(&mut self, c: char) {
        self.input.push(c);
    }

    /// Remove the last character from the prompt buffer
    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the command prompt
    ///
    /// The buffer is split into a property (first word) and term (the rest).
    /// Incomplete input degrades to a no-op transform, so submitting a bare
    /// prompt never errors and never clears the view.
    pub fn submit_command(&mut self) {
        let Mode::Command(kind) = self.mode else {
            return;
        };

        let buffer = std::mem::take(&mut self.input);
        let mut parts = buffer.trim().splitn(2, char::is_whitespace);
        let property = parts.next().unwrap_or("").to_string();
        let term = parts.next().unwrap_or("").trim().to_string();
        self.mode = Mode::List;

        if property.is_empty() {
            return;
        }

        let directive = match kind {
            CommandKind::FuzzySearch => {
                if term.is_empty() {
                    return;
                }
                QueryDirective::Fuzzy { property, term }
            }
            CommandKind::ExactSearch => {
                if term.is_empty() {
                    return;
                }
                QueryDirective::Exact { property, term }
            }
            CommandKind::SortAscending => QueryDirective::Sort {
                property,
                reverse: false,
            },
            CommandKind::SortDescending => QueryDirective::Sort {
                property,
                reverse: true,
            },
        };

        self.apply_directive(&directive);
    }
}
