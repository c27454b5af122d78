//! Filter panel — current filter window, ranking, click mode, key help.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::app::App;
use crate::navigation::key_bindings_help;
use crate::theme::Theme;

pub struct FilterPanel<'a> {
    app: &'a App,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> FilterPanel<'a> {
    pub fn new(app: &'a App, theme: &'a Theme, focused: bool) -> Self {
        Self {
            app,
            theme,
            focused,
        }
    }

    fn list_or_all(values: &[String]) -> String {
        if values.is_empty() {
            "(all)".into()
        } else {
            values.join(", ")
        }
    }
}

impl Widget for FilterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = |text: &str| Span::styled(format!("{text:<11}"), Style::default().fg(self.theme.muted));
        let value =
            |text: String| Span::styled(text, Style::default().fg(self.theme.text_primary));

        let filter = &self.app.filter;
        let lines = vec![
            Line::from(vec![
                label("Window"),
                value(format!("{} to {}", filter.start_date, filter.end_date)),
            ]),
            Line::from(vec![
                label("Categories"),
                value(Self::list_or_all(&filter.categories)),
            ]),
            Line::from(vec![
                label("Cities"),
                value(Self::list_or_all(&filter.cities)),
            ]),
            Line::from(vec![
                label("Statuses"),
                value(Self::list_or_all(&filter.statuses)),
            ]),
            Line::from(vec![
                label("Ranking"),
                value(format!(
                    "{} {} by avg QoQ",
                    self.app.ranking.direction.label(),
                    self.app.ranking.count
                )),
            ]),
            Line::from(vec![
                label("Click mode"),
                value(self.app.coordinator.mode().label().into()),
            ]),
            help_line(self.theme),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Filters ")
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style(self.focused)),
            )
            .render(area, buf);
    }
}

fn help_line(theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in key_bindings_help().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.muted)));
        }
        spans.push(Span::styled(
            format!("{key}: "),
            Style::default().fg(theme.muted),
        ));
        spans.push(Span::styled(
            action,
            Style::default().fg(theme.text_secondary),
        ));
    }
    Line::from(spans)
}
