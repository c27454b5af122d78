//! Table panel — the conditionally formatted merchant summary table.
//!
//! Cell styles come straight from the core's `StyledRow` tags: positive
//! metrics green, negative red, undefined blank, clicked merchant ids
//! highlighted.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, Widget};

use crate::app::App;
use crate::theme::Theme;

pub struct TablePanel<'a> {
    app: &'a App,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> TablePanel<'a> {
    pub fn new(app: &'a App, theme: &'a Theme, focused: bool) -> Self {
        Self {
            app,
            theme,
            focused,
        }
    }
}

impl Widget for TablePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Merchant Summary ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let header = Row::new(
            ["Merchant", "Avg MoM", "Avg QoQ", "Avg YoY", "CAGR"].map(|h| {
                Cell::from(h).style(
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
            }),
        )
        .height(1);

        let rows = self.app.styled.iter().enumerate().map(|(i, row)| {
            let cells = vec![
                Cell::from(row.merchant_id.text.as_str())
                    .style(self.theme.cell_style(row.merchant_id.style)),
                Cell::from(row.avg_mom.text.as_str())
                    .style(self.theme.cell_style(row.avg_mom.style)),
                Cell::from(row.avg_qoq.text.as_str())
                    .style(self.theme.cell_style(row.avg_qoq.style)),
                Cell::from(row.avg_yoy.text.as_str())
                    .style(self.theme.cell_style(row.avg_yoy.style)),
                Cell::from(row.cagr.text.as_str()).style(self.theme.cell_style(row.cagr.style)),
            ];

            let row_style = if i == self.app.cursor {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(cells).style(row_style).height(1)
        });

        let widths = [
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(9),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .render(area, buf);
    }
}
