//! Cell styling — total pure mappings from display values to style tags.
//!
//! The presentation layer maps each [`CellStyle`] tag to whatever its
//! rendering toolkit uses (terminal colors, CSS classes). The core never
//! deals in colors.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::metrics::MerchantSummary;

/// Style tag attached to each display cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStyle {
    None,
    Positive,
    Negative,
    Highlighted,
}

/// A pre-formatted display cell plus its style tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledCell {
    pub text: String,
    pub style: CellStyle,
}

/// One display row: merchant id with highlight state, four metric cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledRow {
    pub merchant_id: StyledCell,
    pub avg_mom: StyledCell,
    pub avg_qoq: StyledCell,
    pub avg_yoy: StyledCell,
    pub cagr: StyledCell,
}

impl StyledRow {
    /// Metric cells in display order.
    pub fn metric_cells(&self) -> [&StyledCell; 4] {
        [&self.avg_mom, &self.avg_qoq, &self.avg_yoy, &self.cagr]
    }
}

/// Format a metric for display: two decimals plus `%`, empty when undefined.
pub fn format_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => String::new(),
    }
}

/// Magnitude style for a formatted percentage string.
///
/// Total over all strings: empty input, unparseable input, and exact zero
/// all map to `CellStyle::None`.
pub fn value_style(text: &str) -> CellStyle {
    let numeric = text.trim().trim_end_matches('%');
    match numeric.parse::<f64>() {
        Ok(v) if v > 0.0 => CellStyle::Positive,
        Ok(v) if v < 0.0 => CellStyle::Negative,
        _ => CellStyle::None,
    }
}

/// Highlight style for the id column.
pub fn highlight_style(merchant_id: &str, selection: &HashSet<String>) -> CellStyle {
    if selection.contains(merchant_id) {
        CellStyle::Highlighted
    } else {
        CellStyle::None
    }
}

fn styled_metric(value: Option<f64>) -> StyledCell {
    let text = format_pct(value);
    let style = value_style(&text);
    StyledCell { text, style }
}

/// Map summary rows and the current selection onto display rows.
///
/// The id column carries the highlight style; every metric cell carries its
/// magnitude style.
pub fn apply_selection(rows: &[MerchantSummary], selection: &HashSet<String>) -> Vec<StyledRow> {
    rows.iter()
        .map(|row| StyledRow {
            merchant_id: StyledCell {
                text: row.merchant_id.clone(),
                style: highlight_style(&row.merchant_id, selection),
            },
            avg_mom: styled_metric(row.avg_mom),
            avg_qoq: styled_metric(row.avg_qoq),
            avg_yoy: styled_metric(row.avg_yoy),
            cagr: styled_metric(row.cagr),
        })
        .collect()
}
