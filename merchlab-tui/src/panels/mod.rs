//! Panel widgets and top-level layout.

pub mod chart;
pub mod filters;
pub mod table;

pub use chart::ChartPanel;
pub use filters::FilterPanel;
pub use table::TablePanel;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Panel};
use crate::theme::Theme;

/// Render the whole dashboard: filters on top, chart and table side by
/// side, status line at the bottom.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    frame.render_widget(
        FilterPanel::new(app, theme, app.active_panel == Panel::Filters),
        rows[0],
    );
    frame.render_widget(
        ChartPanel::new(app, theme, app.active_panel == Panel::Chart),
        columns[0],
    );
    frame.render_widget(
        TablePanel::new(app, theme, app.active_panel == Panel::Table),
        columns[1],
    );

    frame.render_widget(status_line(app, theme), rows[2]);
}

fn status_line<'a>(app: &'a App, theme: &Theme) -> Paragraph<'a> {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.active_panel.label()),
            Style::default().fg(theme.accent),
        ),
        Span::styled("│ ", Style::default().fg(theme.muted)),
        Span::styled(&app.data_label, Style::default().fg(theme.text_secondary)),
    ];
    if !app.status.is_empty() {
        spans.push(Span::styled(" │ ", Style::default().fg(theme.muted)));
        spans.push(Span::styled(
            &app.status,
            Style::default().fg(theme.text_primary),
        ));
    }
    Paragraph::new(Line::from(spans))
}
