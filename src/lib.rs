// src/lib.rs — Library root for honeydash

pub mod cli;
pub mod core;
pub mod infra;
pub mod source;
pub mod tui;
pub mod util;
