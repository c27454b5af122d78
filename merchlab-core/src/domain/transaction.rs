//! Transaction — the fundamental input record.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single merchant transaction.
///
/// Rows are immutable once loaded. Everything derived from them (buckets,
/// summaries, rankings) is recomputed from scratch on each filter change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub merchant_id: String,
    pub transaction_id: String,
    pub amount: f64,
    pub timestamp: NaiveDateTime,
    pub category: Option<String>,
    pub city: Option<String>,
    pub account_status: Option<String>,
}

impl Transaction {
    /// Calendar month this transaction falls in.
    pub fn month(&self) -> YearMonth {
        YearMonth {
            year: self.timestamp.year(),
            month: self.timestamp.month(),
        }
    }
}

/// A calendar-month key, ordered chronologically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
