//! Terminal frontend for the browser
//!
//! Owns terminal acquisition and the blocking event loop. Raw mode and the
//! alternate screen are held by a guard value, so the terminal is restored on
//! every exit path, including panics and `?` returns.

use super::events::handle_key;
use super::session::{Mode, SessionPhase, SessionState};
use super::theme::Theme;
use super::UiError;
use crate::record::Record;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};
use std::io::{self, Stdout};

/// RAII guard holding raw mode and the alternate screen
///
/// Dropping the guard restores the terminal. Failures during restore are
/// swallowed; there is nowhere sensible to report them once the screen is
/// being torn down.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn acquire() -> Result<Self, UiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run a browsing session until the user quits
///
/// Blocks on terminal input; one event is handled to completion before the
/// next is read. The terminal is restored before this returns.
///
/// # Errors
///
/// Returns [`UiError`] if the terminal cannot be acquired or an I/O error
/// occurs while reading events or drawing.
pub fn run_session(state: &mut SessionState) -> Result<(), UiError> {
    let mut guard = TerminalGuard::acquire()?;
    let theme = Theme::default();

    while state.phase == SessionPhase::Browsing {
        guard.terminal.draw(|frame| render(frame, state, &theme))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_key(state, key);
            }
            // redrawn at the top of the loop
            Event::Resize(_, _) => {}
            _ => {}
        }
    }

    Ok(())
}

/// Render one frame: header, record list, footer
fn render(frame: &mut Frame, state: &mut SessionState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(3),    // record list
            Constraint::Length(3), // footer
        ])
        .split(frame.area());

    // List rows available inside the bordered block, needed for paging
    state.visible_height = layout[1].height.saturating_sub(2) as usize;

    render_header(frame, state, theme, layout[0]);
    frame.render_widget(RecordList::new(state, theme), layout[1]);
    render_footer(frame, state, theme, layout[2]);
}

fn render_header(frame: &mut Frame, state: &SessionState, theme: &Theme, area: Rect) {
    let mut spans = vec![
        Span::styled(format!(" org: {} ", state.scope_label), theme.title_style()),
        Span::styled(
            format!("({}/{})", state.view.len(), state.full.len()),
            theme.dimmed_style(),
        ),
    ];
    if let Some(desc) = &state.filter_desc {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("[{desc}]"), theme.kind_tag_style()));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style()),
    );
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, state: &SessionState, theme: &Theme, area: Rect) {
    let line = match state.mode {
        Mode::Command(kind) => Line::from(vec![
            Span::styled(format!(" {}: ", kind.prompt()), theme.title_style()),
            Span::raw(state.input.clone()),
            Span::styled("_", theme.cursor_style()),
        ]),
        Mode::List => Line::from(Span::styled(
            " j/k move  s fuzzy  e exact  o/r sort  a reset  q quit ",
            theme.dimmed_style(),
        )),
    };

    let footer = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style()),
    );
    frame.render_widget(footer, area);
}

/// Record list widget with cursor indicator and scrolling window
struct RecordList<'a> {
    state: &'a SessionState,
    theme: &'a Theme,
}

impl<'a> RecordList<'a> {
    fn new(state: &'a SessionState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Render a single record row
    fn render_row(&self, record: &Record, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let text_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let mut spans = vec![
            Span::styled(cursor_char.to_string(), self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(format!("{:<5} ", record.kind.label()), self.theme.kind_tag_style()),
            Span::styled(record.title().to_string(), text_style),
        ];

        for name in ["status", "date", "due"] {
            if let Some(value) = record.property(name) {
                spans.push(Span::styled(
                    format!("  {name}:{value}"),
                    self.theme.dimmed_style(),
                ));
            }
        }
        spans.push(Span::styled(
            format!("  ({})", record.file_name()),
            self.theme.dimmed_style(),
        ));

        ListItem::new(Line::from(spans))
    }
}

impl Widget for RecordList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.state.view.is_empty() {
            Paragraph::new(Span::styled("no entries", self.theme.dimmed_style()))
                .render(inner, buf);
            return;
        }

        let visible_height = inner.height as usize;
        let start = self.state.scroll_offset;
        let end = (start + visible_height).min(self.state.view.len());

        let items: Vec<ListItem> = (start..end)
            .filter_map(|index| {
                let record = self.state.view.get(index)?;
                Some(self.render_row(record, index == self.state.cursor))
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
