//! Theme tokens for the MerchLab TUI.
//!
//! Maps the core's [`CellStyle`] tags onto terminal colors:
//! - **Positive**: green (growth)
//! - **Negative**: red (decline)
//! - **Highlighted**: yellow background, bold (clicked merchants)

use merchlab_core::CellStyle;
use ratatui::style::{Color, Modifier, Style};

/// Color palette for the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Cyan accent (focused panel border, headers)
    pub accent: Color,
    /// Green (positive growth)
    pub positive: Color,
    /// Red (negative growth)
    pub negative: Color,
    /// Yellow (click-selected merchants)
    pub highlight: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
    /// Steel blue (muted text, inactive borders)
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(16, 18, 22),
            accent: Color::Cyan,
            positive: Color::Green,
            negative: Color::Red,
            highlight: Color::Yellow,
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
            muted: Color::Rgb(100, 149, 237),
        }
    }
}

impl Theme {
    /// Terminal style for a core cell-style tag.
    pub fn cell_style(&self, style: CellStyle) -> Style {
        match style {
            CellStyle::None => Style::default().fg(self.text_primary),
            CellStyle::Positive => Style::default().fg(self.positive),
            CellStyle::Negative => Style::default().fg(self.negative),
            CellStyle::Highlighted => Style::default()
                .fg(Color::Black)
                .bg(self.highlight)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Bar color for a growth value.
    pub fn bar_color(&self, value: f64) -> Color {
        if value < 0.0 {
            self.negative
        } else {
            self.positive
        }
    }

    /// Border style for a panel, depending on focus.
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }
}
