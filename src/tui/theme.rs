// src/tui/theme.rs — Color scheme and style definitions for the TUI dashboard.

use ratatui::style::{Color, Modifier, Style};

/// Honey-and-slate palette.
pub struct Theme;

impl Theme {
    // ── Brand colors ─────────────────────────────────────────────
    pub const HONEY: Color = Color::Rgb(245, 180, 40);
    pub const WHITE: Color = Color::Rgb(240, 240, 240);
    pub const SLATE: Color = Color::Rgb(40, 44, 60);
    pub const BLUE: Color = Color::Rgb(70, 130, 220);
    pub const GREEN: Color = Color::Rgb(80, 200, 120);
    pub const RED: Color = Color::Rgb(230, 80, 80);
    pub const GRAY: Color = Color::Rgb(120, 120, 140);
    pub const DIM: Color = Color::Rgb(80, 80, 100);
    pub const CYAN: Color = Color::Rgb(80, 200, 220);

    // ── Semantic styles ──────────────────────────────────────────

    /// Main title / header bar.
    pub fn header() -> Style {
        Style::default().fg(Theme::HONEY).add_modifier(Modifier::BOLD)
    }

    /// Block border (normal).
    pub fn border() -> Style {
        Style::default().fg(Theme::DIM)
    }

    /// Block border (focused).
    pub fn border_focus() -> Style {
        Style::default().fg(Theme::HONEY)
    }

    /// Normal body text.
    pub fn text() -> Style {
        Style::default().fg(Theme::WHITE)
    }

    /// Dimmed / secondary text.
    pub fn text_dim() -> Style {
        Style::default().fg(Theme::GRAY)
    }

    pub fn error() -> Style {
        Style::default().fg(Theme::RED)
    }

    pub fn info() -> Style {
        Style::default().fg(Theme::BLUE)
    }

    /// Large number on a stat card.
    pub fn stat_value() -> Style {
        Style::default().fg(Theme::CYAN).add_modifier(Modifier::BOLD)
    }

    /// Section titles inside the detail pane.
    pub fn section() -> Style {
        Style::default()
            .fg(Theme::HONEY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Sender name in the transcript.
    pub fn sender() -> Style {
        Style::default().fg(Theme::CYAN).add_modifier(Modifier::BOLD)
    }

    /// Highlighted row in the session list.
    pub fn selected() -> Style {
        Style::default().bg(Theme::SLATE).fg(Theme::WHITE)
    }

    /// "Scam" / "Clean" badge.
    pub fn badge(scam: bool) -> Style {
        if scam {
            Style::default().fg(Theme::RED).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::GRAY)
        }
    }

    /// Key hint in the footer.
    pub fn key_hint() -> Style {
        Style::default().fg(Theme::HONEY)
    }

    /// Description next to key hint.
    pub fn key_desc() -> Style {
        Style::default().fg(Theme::GRAY)
    }
}
