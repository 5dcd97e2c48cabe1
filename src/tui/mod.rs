// src/tui/mod.rs — TUI dashboard module.
//
// Terminal rendition of the session dashboard, built with ratatui.
// Launch via `honeydash` or `honeydash dashboard`.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::run_dashboard;
