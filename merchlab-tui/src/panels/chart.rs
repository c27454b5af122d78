//! Chart panel — horizontal bar chart of ranked average QoQ growth.
//!
//! Each bar is one merchant. The cursor row carries a `▶` marker; bars
//! marked for a pending multi-click gesture carry `*`; click-selected
//! merchants render their id in the highlight style.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use merchlab_core::{format_pct, CellStyle};

use crate::app::App;
use crate::theme::Theme;

const ID_WIDTH: usize = 10;
const VALUE_WIDTH: usize = 9;

pub struct ChartPanel<'a> {
    app: &'a App,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> ChartPanel<'a> {
    pub fn new(app: &'a App, theme: &'a Theme, focused: bool) -> Self {
        Self {
            app,
            theme,
            focused,
        }
    }
}

impl Widget for ChartPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " Merchant Growth — avg QoQ [{} {}] ",
            self.app.ranking.direction.label(),
            self.app.ranking.count
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.app.rows.is_empty() {
            let line = Line::from(Span::styled(
                "no merchants in range",
                Style::default().fg(self.theme.muted),
            ));
            buf.set_line(inner.x, inner.y, &line, inner.width);
            return;
        }

        let max_abs = self
            .app
            .rows
            .iter()
            .filter_map(|r| r.avg_qoq)
            .map(f64::abs)
            .fold(0.0f64, f64::max)
            .max(1e-9);

        let bar_width = (inner.width as usize).saturating_sub(ID_WIDTH + VALUE_WIDTH + 4);

        for (i, row) in self.app.rows.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }

            let cursor = if i == self.app.cursor { "▶" } else { " " };
            let marked = if self.app.marked.contains(&row.merchant_id) {
                "*"
            } else {
                " "
            };

            let id_style = if self.app.coordinator.is_selected(&row.merchant_id) {
                self.theme.cell_style(CellStyle::Highlighted)
            } else {
                Style::default().fg(self.theme.text_primary)
            };

            let mut spans = vec![
                Span::styled(format!("{cursor}{marked} "), Style::default().fg(self.theme.accent)),
                Span::styled(
                    format!("{:<width$}", clip(&row.merchant_id, ID_WIDTH), width = ID_WIDTH),
                    id_style,
                ),
                Span::raw(" "),
            ];

            match row.avg_qoq {
                Some(value) => {
                    let len = ((value.abs() / max_abs) * bar_width as f64).round() as usize;
                    spans.push(Span::styled(
                        "█".repeat(len.min(bar_width)),
                        Style::default().fg(self.theme.bar_color(value)),
                    ));
                    spans.push(Span::raw(" ".repeat(bar_width.saturating_sub(len) + 1)));
                    spans.push(Span::styled(
                        format!("{:>width$}", format_pct(Some(value)), width = VALUE_WIDTH),
                        Style::default().fg(self.theme.bar_color(value)),
                    ));
                }
                None => {
                    spans.push(Span::styled(
                        format!("{:>width$}", "(n/a)", width = bar_width + VALUE_WIDTH + 1),
                        Style::default().fg(self.theme.muted),
                    ));
                }
            }

            let line = Line::from(spans);
            buf.set_line(inner.x, inner.y + i as u16, &line, inner.width);
        }
    }
}

fn clip(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}
