//! Filter stage — date range plus optional categorical filters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Transaction;

/// Filter parameters supplied by the presentation layer.
///
/// The date range is inclusive on both ends. Empty categorical lists impose
/// no constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub statuses: Vec<String>,
}

impl FilterConfig {
    /// Date-range-only filter; all categorical filters pass through.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            categories: Vec::new(),
            cities: Vec::new(),
            statuses: Vec::new(),
        }
    }

    /// Filter span in 365.25-day years, the basis for CAGR annualization.
    pub fn span_years(&self) -> f64 {
        (self.end_date - self.start_date).num_days() as f64 / 365.25
    }

    fn matches(&self, tx: &Transaction) -> bool {
        let date = tx.timestamp.date();
        date >= self.start_date
            && date <= self.end_date
            && in_filter(&self.categories, &tx.category)
            && in_filter(&self.cities, &tx.city)
            && in_filter(&self.statuses, &tx.account_status)
    }
}

/// An empty list passes everything; a record with a missing attribute fails
/// any non-empty list on that attribute.
fn in_filter(list: &[String], value: &Option<String>) -> bool {
    if list.is_empty() {
        return true;
    }
    match value {
        Some(v) => list.iter().any(|allowed| allowed == v),
        None => false,
    }
}

/// Produce the working subset for the metric engine.
///
/// Zero matches is a valid outcome, not an error; downstream stages produce
/// an empty summary from it.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    config: &FilterConfig,
) -> Vec<&'a Transaction> {
    transactions.iter().filter(|tx| config.matches(tx)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(merchant: &str, date: &str, category: Option<&str>, city: Option<&str>) -> Transaction {
        Transaction {
            merchant_id: merchant.into(),
            transaction_id: format!("{merchant}-{date}"),
            amount: 10.0,
            timestamp: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            category: category.map(Into::into),
            city: city.map(Into::into),
            account_status: Some("active".into()),
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn date_range_is_inclusive() {
        let txs = vec![
            tx("M1", "2024-01-01", None, None),
            tx("M1", "2024-01-15", None, None),
            tx("M1", "2024-01-31", None, None),
            tx("M1", "2024-02-01", None, None),
        ];
        let config = FilterConfig::new(date("2024-01-01"), date("2024-01-31"));
        let subset = filter_transactions(&txs, &config);
        assert_eq!(subset.len(), 3);
    }

    #[test]
    fn empty_categorical_lists_pass_through() {
        let txs = vec![tx("M1", "2024-01-15", Some("grocery"), Some("Austin"))];
        let config = FilterConfig::new(date("2024-01-01"), date("2024-12-31"));
        assert_eq!(filter_transactions(&txs, &config).len(), 1);
    }

    #[test]
    fn category_filter_restricts() {
        let txs = vec![
            tx("M1", "2024-01-15", Some("grocery"), None),
            tx("M2", "2024-01-15", Some("fuel"), None),
        ];
        let mut config = FilterConfig::new(date("2024-01-01"), date("2024-12-31"));
        config.categories = vec!["grocery".into()];
        let subset = filter_transactions(&txs, &config);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].merchant_id, "M1");
    }

    #[test]
    fn missing_attribute_fails_non_empty_filter() {
        let txs = vec![tx("M1", "2024-01-15", None, None)];
        let mut config = FilterConfig::new(date("2024-01-01"), date("2024-12-31"));
        config.categories = vec!["grocery".into()];
        assert!(filter_transactions(&txs, &config).is_empty());
    }

    #[test]
    fn filters_combine_conjunctively() {
        let txs = vec![
            tx("M1", "2024-01-15", Some("grocery"), Some("Austin")),
            tx("M2", "2024-01-15", Some("grocery"), Some("Dallas")),
        ];
        let mut config = FilterConfig::new(date("2024-01-01"), date("2024-12-31"));
        config.categories = vec!["grocery".into()];
        config.cities = vec!["Austin".into()];
        let subset = filter_transactions(&txs, &config);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].merchant_id, "M1");
    }

    #[test]
    fn excluding_range_yields_empty_subset() {
        let txs = vec![tx("M1", "2024-01-15", None, None)];
        let config = FilterConfig::new(date("2030-01-01"), date("2030-12-31"));
        assert!(filter_transactions(&txs, &config).is_empty());
    }

    #[test]
    fn span_years() {
        let config = FilterConfig::new(date("2022-01-01"), date("2024-01-01"));
        let years = config.span_years();
        assert!((years - 2.0).abs() < 0.01);

        let degenerate = FilterConfig::new(date("2024-01-01"), date("2024-01-01"));
        assert_eq!(degenerate.span_years(), 0.0);
    }
}
