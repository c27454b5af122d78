//! Application state — single-owner, main-thread only.
//!
//! Holds the immutable transaction table plus the ephemeral filter, ranking,
//! and selection state. Any change to the filter or ranking renders a new
//! chart, which clears the click selection (selections are scoped to the
//! lifetime of one rendered chart).

use std::sync::Arc;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use merchlab_core::{
    apply_selection, compute_summary, FilterConfig, MerchantSummary, RankingConfig,
    SelectionCoordinator, SelectionEvent, StyledRow, Transaction,
};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Filters,
    Chart,
    Table,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Filters => 0,
            Panel::Chart => 1,
            Panel::Table => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Filters),
            1 => Some(Panel::Chart),
            2 => Some(Panel::Table),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Filters => "Filters",
            Panel::Chart => "Chart",
            Panel::Table => "Table",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 3).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 2) % 3).unwrap()
    }
}

/// All dashboard state.
pub struct App {
    pub transactions: Arc<Vec<Transaction>>,
    pub data_label: String,
    pub filter: FilterConfig,
    pub ranking: RankingConfig,
    pub coordinator: SelectionCoordinator,
    pub rows: Vec<MerchantSummary>,
    pub styled: Vec<StyledRow>,
    /// Bar/row under the cursor.
    pub cursor: usize,
    /// Pending multi-click gesture: bars marked but not yet committed.
    pub marked: Vec<String>,
    pub active_panel: Panel,
    pub status: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        transactions: Arc<Vec<Transaction>>,
        data_label: String,
        filter: FilterConfig,
        ranking: RankingConfig,
        coordinator: SelectionCoordinator,
    ) -> Self {
        let mut app = Self {
            transactions,
            data_label,
            filter,
            ranking,
            coordinator,
            rows: Vec::new(),
            styled: Vec::new(),
            cursor: 0,
            marked: Vec::new(),
            active_panel: Panel::Chart,
            status: String::new(),
            should_quit: false,
        };
        app.new_chart();
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Recompute rows for the current filter/ranking. Renders a new chart,
    /// so the selection and any pending gesture are dropped.
    pub fn new_chart(&mut self) {
        self.coordinator.update(&[]);
        self.marked.clear();
        self.rows = compute_summary(&self.transactions, &self.filter, &self.ranking);
        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
        self.restyle();
    }

    /// Re-style the current rows against the current selection.
    fn restyle(&mut self) {
        self.styled = apply_selection(&self.rows, self.coordinator.selected());
    }

    // ── Chart interaction ────────────────────────────────────────────

    pub fn cursor_next(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = (self.cursor + 1).min(self.rows.len() - 1);
        }
    }

    pub fn cursor_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Merchant id under the cursor, if any rows are shown.
    pub fn cursor_merchant(&self) -> Option<&str> {
        self.rows.get(self.cursor).map(|r| r.merchant_id.as_str())
    }

    /// Toggle the bar under the cursor in the pending multi-click gesture.
    pub fn mark_current(&mut self) {
        let Some(id) = self.cursor_merchant().map(str::to_string) else {
            return;
        };
        if let Some(pos) = self.marked.iter().position(|m| *m == id) {
            self.marked.remove(pos);
        } else {
            self.marked.push(id);
        }
    }

    /// Commit the click gesture as one event batch.
    ///
    /// With pending marks the batch is the marked bars in mark order;
    /// otherwise it is the single bar under the cursor. The coordinator
    /// decides how much of the batch survives (single- vs multi-click).
    pub fn commit_click(&mut self) {
        let batch: Vec<SelectionEvent> = if self.marked.is_empty() {
            self.cursor_merchant()
                .map(SelectionEvent::new)
                .into_iter()
                .collect()
        } else {
            self.marked.iter().map(SelectionEvent::new).collect()
        };
        self.coordinator.update(&batch);
        self.marked.clear();
        self.status = match self.coordinator.selected().len() {
            0 => "selection cleared".into(),
            n => format!("{n} merchant(s) highlighted"),
        };
        self.restyle();
    }

    /// An empty click batch: nothing stays highlighted.
    pub fn clear_selection(&mut self) {
        self.coordinator.update(&[]);
        self.marked.clear();
        self.status = "selection cleared".into();
        self.restyle();
    }

    pub fn toggle_interaction_mode(&mut self) {
        let mode = self.coordinator.mode().toggle();
        self.coordinator.set_mode(mode);
        self.status = format!("{} mode", mode.label());
    }

    // ── Filter / ranking interaction ─────────────────────────────────

    pub fn shift_start(&mut self, months: i32) {
        let shifted = shift_month(self.filter.start_date, months);
        if shifted <= self.filter.end_date {
            self.filter.start_date = shifted;
            self.new_chart();
        }
    }

    pub fn shift_end(&mut self, months: i32) {
        let shifted = shift_month(self.filter.end_date, months);
        if shifted >= self.filter.start_date {
            self.filter.end_date = shifted;
            self.new_chart();
        }
    }

    pub fn toggle_direction(&mut self) {
        self.ranking.direction = self.ranking.direction.toggle();
        self.new_chart();
    }

    pub fn adjust_count(&mut self, delta: i32) {
        let count = self.ranking.count as i64 + delta as i64;
        self.ranking.count = count.clamp(1, 100) as usize;
        self.new_chart();
    }
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
            .unwrap_or(date)
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
            .unwrap_or(date)
    }
}
