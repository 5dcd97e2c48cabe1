// src/tui/app.rs — TUI application state, event loop, and rendering.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, ListState, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::core::record::SessionRecord;
use crate::core::state::{DashboardState, FetchTicket};
use crate::infra::errors::SourceError;
use crate::source::RecordSource;

use super::theme::Theme;
use super::widgets;

type FetchResult = (FetchTicket, Result<Vec<SessionRecord>, SourceError>);

// ── Focus ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Focus {
    List,
    Search,
}

#[derive(Debug, PartialEq, Eq)]
enum KeyOutcome {
    Continue,
    Refresh,
    Quit,
}

// ── App state ────────────────────────────────────────────────────

struct App {
    state: DashboardState,
    focus: Focus,
    list_state: ListState,
    transcript_scroll: u16,
    origin: String,
    source: Arc<dyn RecordSource>,
    limit: u32,
    tx: UnboundedSender<FetchResult>,
    rx: UnboundedReceiver<FetchResult>,
}

impl App {
    fn new(source: Arc<dyn RecordSource>, limit: u32) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: DashboardState::new(),
            focus: Focus::List,
            list_state: ListState::default(),
            transcript_scroll: 0,
            origin: source.describe(),
            source,
            limit,
            tx,
            rx,
        }
    }

    /// Start a fetch in the background. Earlier fetches are not cancelled;
    /// whichever finishes last decides the collection.
    fn refresh(&mut self) {
        let ticket = self.state.begin_fetch();
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let limit = self.limit;
        tokio::spawn(async move {
            let result = source.fetch_records(limit).await;
            // The receiver is gone only when the dashboard has exited.
            let _ = tx.send((ticket, result));
        });
    }

    fn drain_fetches(&mut self) {
        while let Ok((ticket, result)) = self.rx.try_recv() {
            self.state.apply_fetch(ticket, result);
        }
    }

    fn move_selection(&mut self, forward: bool) {
        let before = self.state.selected().map(|r| r.session_id.clone());
        if forward {
            self.state.select_next();
        } else {
            self.state.select_prev();
        }
        if self.state.selected().map(|r| &r.session_id) != before.as_ref() {
            self.transcript_scroll = 0;
        }
    }

    fn edit_query(&mut self, edit: impl FnOnce(&mut String)) {
        let mut query = self.state.query().to_string();
        edit(&mut query);
        self.state.set_query(query);
        self.transcript_scroll = 0;
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Quit;
        }

        match self.focus {
            Focus::Search => match key.code {
                KeyCode::Enter | KeyCode::Esc => self.focus = Focus::List,
                KeyCode::Backspace => self.edit_query(|q| {
                    q.pop();
                }),
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.edit_query(String::clear)
                }
                KeyCode::Char(c) => self.edit_query(|q| q.push(c)),
                _ => {}
            },
            Focus::List => match key.code {
                KeyCode::Char('q') => return KeyOutcome::Quit,
                KeyCode::Char('r') => return KeyOutcome::Refresh,
                KeyCode::Char('/') => self.focus = Focus::Search,
                KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
                KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
                KeyCode::PageDown => {
                    self.transcript_scroll = self.transcript_scroll.saturating_add(10)
                }
                KeyCode::PageUp => {
                    self.transcript_scroll = self.transcript_scroll.saturating_sub(10)
                }
                _ => {}
            },
        }
        KeyOutcome::Continue
    }
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the TUI dashboard. Blocks until the user quits (q / Ctrl-C).
///
/// Must be called from within a tokio runtime; fetches run as spawned tasks.
pub fn run_dashboard(source: Arc<dyn RecordSource>, limit: u32) -> anyhow::Result<()> {
    let mut app = App::new(source, limit);
    tracing::info!(origin = %app.origin, limit, "starting dashboard");
    app.refresh();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        app.drain_fetches();
        terminal.draw(|f| render(f, app))?;

        // Short poll so finished fetches show up promptly.
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.handle_key(key) {
                    KeyOutcome::Quit => return Ok(()),
                    KeyOutcome::Refresh => app.refresh(),
                    KeyOutcome::Continue => {}
                }
            }
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────

fn render(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Stat cards
            Constraint::Length(3), // Search
            Constraint::Length(1), // Status / error
            Constraint::Min(8),    // Sessions + detail
            Constraint::Length(1), // Footer / key hints
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    widgets::stats::render(f, chunks[1], &app.state.stats());
    widgets::search::render(f, chunks[2], app.state.query(), app.focus == Focus::Search);
    render_status(f, chunks[3], app);
    render_body(f, chunks[4], app);
    render_footer(f, chunks[5], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let updated = app
        .state
        .last_updated()
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".into());
    let refresh = if app.state.is_loading() {
        Span::styled("Refreshing", Theme::key_hint())
    } else {
        Span::styled("Idle", Theme::text_dim())
    };

    let line = Line::from(vec![
        refresh,
        Span::styled(format!("  Last updated: {updated}  "), Theme::text_dim()),
        Span::styled(app.origin.as_str(), Theme::text_dim()),
    ]);

    let p = Paragraph::new(line).block(
        Block::default()
            .title(Span::styled(" Scam Intelligence Dashboard ", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );
    f.render_widget(p, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(err) = app.state.error() {
        Line::from(Span::styled(format!(" {err}"), Theme::error()))
    } else if app.state.is_loading() {
        Line::from(Span::styled(" Loading dashboard data...", Theme::text_dim()))
    } else {
        Line::from("")
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_body(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let filtered = app.state.filtered();
    let selected = app.state.selection().resolve_index(&filtered);
    app.list_state.select(selected);

    widgets::sessions::render(
        f,
        chunks[0],
        &filtered,
        app.state.records().len(),
        &mut app.list_state,
        app.focus == Focus::List,
    );
    widgets::detail::render(
        f,
        chunks[1],
        selected.map(|i| filtered[i]),
        app.transcript_scroll,
    );
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.focus {
        Focus::Search => Line::from(vec![
            Span::styled(" Enter/Esc", Theme::key_hint()),
            Span::styled(" done  ", Theme::key_desc()),
            Span::styled("Ctrl-U", Theme::key_hint()),
            Span::styled(" clear", Theme::key_desc()),
        ]),
        Focus::List => Line::from(vec![
            Span::styled(" q", Theme::key_hint()),
            Span::styled(" quit  ", Theme::key_desc()),
            Span::styled("/", Theme::key_hint()),
            Span::styled(" search  ", Theme::key_desc()),
            Span::styled("j/k/\u{2191}\u{2193}", Theme::key_hint()),
            Span::styled(" select  ", Theme::key_desc()),
            Span::styled("PgUp/PgDn", Theme::key_hint()),
            Span::styled(" scroll  ", Theme::key_desc()),
            Span::styled("r", Theme::key_hint()),
            Span::styled(" refresh", Theme::key_desc()),
        ]),
    };
    f.render_widget(Paragraph::new(hints), area);
}
