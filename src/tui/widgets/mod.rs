// src/tui/widgets/mod.rs — Widget sub-modules for each dashboard panel.

pub mod detail;
pub mod search;
pub mod sessions;
pub mod stats;
