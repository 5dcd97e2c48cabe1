// src/core/mod.rs — Session records and the dashboard state machine

pub mod filter;
pub mod record;
pub mod selection;
pub mod state;
pub mod stats;
