// src/core/stats.rs — Summary statistics over the loaded (unfiltered) records.

use super::record::SessionRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub total_sessions: usize,
    pub total_scams: usize,
    pub total_messages: u64,
}

impl SessionStats {
    pub fn compute(records: &[SessionRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, record| {
            acc.total_sessions += 1;
            if record.scam_detected {
                acc.total_scams += 1;
            }
            acc.total_messages += record.message_count();
            acc
        })
    }
}
