// src/core/selection.rs — Which session the detail view shows.
//
// The stored id is never cleared by filtering: a record hidden by the
// current query comes back as the selection once the query lets it through.

use super::record::SessionRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoneSelected,
    HasCandidate(String),
}

impl Selection {
    /// Store `id` as the candidate, whether or not it is currently visible.
    pub fn select(&mut self, id: impl Into<String>) {
        *self = Selection::HasCandidate(id.into());
    }

    pub fn candidate(&self) -> Option<&str> {
        match self {
            Selection::NoneSelected => None,
            Selection::HasCandidate(id) => Some(id.as_str()),
        }
    }

    /// Position within `filtered` of the record the detail view should show:
    /// the candidate if present, else the first record, else nothing.
    pub fn resolve_index(&self, filtered: &[&SessionRecord]) -> Option<usize> {
        if filtered.is_empty() {
            return None;
        }
        let hit = self
            .candidate()
            .and_then(|id| filtered.iter().position(|r| r.session_id == id));
        Some(hit.unwrap_or(0))
    }

    pub fn resolve<'a>(&self, filtered: &[&'a SessionRecord]) -> Option<&'a SessionRecord> {
        self.resolve_index(filtered).map(|i| filtered[i])
    }

    /// Move the candidate to the record after the resolved one (clamped).
    pub fn select_next(&mut self, filtered: &[&SessionRecord]) {
        if let Some(i) = self.resolve_index(filtered) {
            let next = (i + 1).min(filtered.len() - 1);
            self.select(filtered[next].session_id.clone());
        }
    }

    /// Move the candidate to the record before the resolved one (clamped).
    pub fn select_prev(&mut self, filtered: &[&SessionRecord]) {
        if let Some(i) = self.resolve_index(filtered) {
            self.select(filtered[i.saturating_sub(1)].session_id.clone());
        }
    }
}
