// src/core/state.rs — The dashboard's single state container.
//
// Owned by whoever drives the dashboard (the TUI app or a CLI command).
// Holds the fetched records, the query and the selection, and derives the
// three read-only views from them: stats, filtered list, resolved selection.

use chrono::{DateTime, Local};

use super::filter::SearchIndex;
use super::record::SessionRecord;
use super::selection::Selection;
use super::stats::SessionStats;
use crate::infra::errors::SourceError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Identifies one fetch, in the order fetches were started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Default)]
pub struct DashboardState {
    records: Vec<SessionRecord>,
    index: SearchIndex,
    stats: SessionStats,
    query: String,
    selection: Selection,
    status: LoadStatus,
    error: Option<String>,
    last_updated: Option<DateTime<Local>>,
    issued: u64,
    last_applied: Option<FetchTicket>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ready state over an already-fetched collection.
    pub fn with_records(records: Vec<SessionRecord>) -> Self {
        let mut state = Self::new();
        state.install(records);
        state.status = LoadStatus::Ready;
        state
    }

    // ── Mutators ─────────────────────────────────────────────────

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selection.select(id);
    }

    pub fn select_next(&mut self) {
        let filtered = filtered_view(&self.records, &self.index, &self.query);
        self.selection.select_next(&filtered);
    }

    pub fn select_prev(&mut self) {
        let filtered = filtered_view(&self.records, &self.index, &self.query);
        self.selection.select_prev(&filtered);
    }

    /// Mark a fetch as started. Any previous error is cleared.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.status = LoadStatus::Loading;
        self.error = None;
        FetchTicket(self.issued)
    }

    /// Apply a finished fetch. Results are applied in arrival order, so the
    /// last response to arrive wins even if its fetch started earlier.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<SessionRecord>, SourceError>,
    ) {
        if self.last_applied.is_some_and(|applied| ticket < applied) {
            tracing::debug!(
                ticket = ticket.0,
                newer = self.last_applied.map(|t| t.0),
                "older fetch finished last; its result replaces the newer one"
            );
        }
        self.last_applied = Some(ticket);

        match result {
            Ok(records) => {
                tracing::info!(count = records.len(), "session records loaded");
                self.install(records);
                self.last_updated = Some(Local::now());
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                tracing::warn!(error = %e, "fetch failed; keeping previous records");
                self.error = Some(banner_message(&e));
                self.status = LoadStatus::Error;
            }
        }
    }

    fn install(&mut self, records: Vec<SessionRecord>) {
        self.index = SearchIndex::build(&records);
        self.stats = SessionStats::compute(&records);
        self.records = records;
    }

    // ── Derived views ────────────────────────────────────────────

    /// Aggregates over the whole collection, ignoring the query.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn filtered(&self) -> Vec<&SessionRecord> {
        filtered_view(&self.records, &self.index, &self.query)
    }

    pub fn selected(&self) -> Option<&SessionRecord> {
        self.selection.resolve(&self.filtered())
    }

    /// Position of the resolved selection within `filtered()`.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.resolve_index(&self.filtered())
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }
}

/// Displayable text for a failed fetch. Rejected keys get a hint.
fn banner_message(err: &SourceError) -> String {
    let message = err.to_string();
    match err.status() {
        Some(401 | 403) => format!("{message} (check the dashboard API key)"),
        _ if message.is_empty() => "Failed to load data".to_string(),
        _ => message,
    }
}

fn filtered_view<'a>(
    records: &'a [SessionRecord],
    index: &SearchIndex,
    query: &str,
) -> Vec<&'a SessionRecord> {
    index.filter(query).into_iter().map(|i| &records[i]).collect()
}
