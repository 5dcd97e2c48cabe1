// src/core/filter.rs — Free-text filtering of session records.
//
// A record matches when its lowercased JSON form contains the lowercased
// query. Blank queries match everything. Order is always preserved.

use super::record::SessionRecord;

/// Lowercased needle for a query, or `None` when the query is blank.
///
/// Only blankness is judged on the trimmed query; a non-blank query keeps
/// its surrounding whitespace.
pub fn needle(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

pub fn matches(record: &SessionRecord, needle: &str) -> bool {
    record.search_text().to_lowercase().contains(needle)
}

/// Records matching `query`, in their original order.
pub fn filter_records<'a>(records: &'a [SessionRecord], query: &str) -> Vec<&'a SessionRecord> {
    match needle(query) {
        None => records.iter().collect(),
        Some(needle) => records.iter().filter(|r| matches(r, &needle)).collect(),
    }
}

/// Lowercased search text of every record in a collection, built once per fetch.
///
/// Records never change after a fetch, so the haystacks stay valid until the
/// collection is replaced.
#[derive(Debug, Default, Clone)]
pub struct SearchIndex {
    haystacks: Vec<String>,
}

impl SearchIndex {
    pub fn build(records: &[SessionRecord]) -> Self {
        Self {
            haystacks: records
                .iter()
                .map(|r| r.search_text().to_lowercase())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.haystacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.haystacks.is_empty()
    }

    /// Positions of the matching records, ascending.
    pub fn filter(&self, query: &str) -> Vec<usize> {
        match needle(query) {
            None => (0..self.haystacks.len()).collect(),
            Some(needle) => self
                .haystacks
                .iter()
                .enumerate()
                .filter(|(_, hay)| hay.contains(&needle))
                .map(|(i, _)| i)
                .collect(),
        }
    }
}
