//! CSV transaction loader.
//!
//! Required columns: `merchant_id`, `transaction_id`, `amount`,
//! `transaction_date`. Optional columns: `category`, `city`,
//! `account_status` (empty cells become `None`).
//!
//! A missing required column or an unparseable date/amount is fatal at load
//! time. Timestamps accept `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS`, or a
//! bare `YYYY-MM-DD` (midnight).

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::Transaction;

/// Columns every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "merchant_id",
    "transaction_id",
    "amount",
    "transaction_date",
];

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("malformed CSV at data row {row}: {source}")]
    Row { row: usize, source: csv::Error },

    #[error("data row {row}: unparseable date '{value}'")]
    Date { row: usize, value: String },

    #[error("data row {row}: unparseable amount '{value}'")]
    Amount { row: usize, value: String },
}

/// Load and parse a transaction CSV from disk.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_transactions(file)
}

/// Parse a transaction CSV from any reader.
pub fn parse_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| LoadError::Row { row: 0, source: e })?
        .clone();

    let columns = ColumnIndex::resolve(&headers)?;

    let mut transactions = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let row = i + 1; // first data row is row 1
        let record = record.map_err(|e| LoadError::Row { row, source: e })?;
        transactions.push(columns.parse_row(&record, row)?);
    }

    Ok(transactions)
}

/// Resolved positions of the known columns in this file's header.
struct ColumnIndex {
    merchant_id: usize,
    transaction_id: usize,
    amount: usize,
    transaction_date: usize,
    category: Option<usize>,
    city: Option<usize>,
    account_status: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            merchant_id: require("merchant_id")?,
            transaction_id: require("transaction_id")?,
            amount: require("amount")?,
            transaction_date: require("transaction_date")?,
            category: find("category"),
            city: find("city"),
            account_status: find("account_status"),
        })
    }

    fn parse_row(
        &self,
        record: &csv::StringRecord,
        row: usize,
    ) -> Result<Transaction, LoadError> {
        let field = |idx: usize| record.get(idx).unwrap_or("");
        let optional = |idx: Option<usize>| {
            idx.map(field)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let amount_raw = field(self.amount);
        let amount = amount_raw.trim().parse::<f64>().map_err(|_| LoadError::Amount {
            row,
            value: amount_raw.to_string(),
        })?;

        let date_raw = field(self.transaction_date);
        let timestamp = parse_timestamp(date_raw).ok_or_else(|| LoadError::Date {
            row,
            value: date_raw.to_string(),
        })?;

        Ok(Transaction {
            merchant_id: field(self.merchant_id).to_string(),
            transaction_id: field(self.transaction_id).to_string(),
            amount,
            timestamp,
            category: optional(self.category),
            city: optional(self.city),
            account_status: optional(self.account_status),
        })
    }
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CSV: &str = "\
merchant_id,transaction_id,amount,transaction_date,category,city,account_status
M001,T0001,10.50,2024-01-05,grocery,Austin,active
M001,T0002,12.00,2024-01-20 09:15:00,grocery,Austin,active
M002,T0003,99.99,2024-02-01T18:00:00,,Dallas,
";

    #[test]
    fn parses_valid_csv() {
        let txs = parse_transactions(VALID_CSV.as_bytes()).unwrap();
        assert_eq!(txs.len(), 3);
        assert_eq!(txs[0].merchant_id, "M001");
        assert_eq!(txs[0].amount, 10.50);
        assert_eq!(txs[0].timestamp.date().to_string(), "2024-01-05");
        assert_eq!(txs[1].timestamp.time().to_string(), "09:15:00");
        assert_eq!(txs[2].timestamp.time().to_string(), "18:00:00");
    }

    #[test]
    fn empty_optional_cells_become_none() {
        let txs = parse_transactions(VALID_CSV.as_bytes()).unwrap();
        assert_eq!(txs[2].category, None);
        assert_eq!(txs[2].city.as_deref(), Some("Dallas"));
        assert_eq!(txs[2].account_status, None);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let csv = "merchant_id,amount,transaction_date\nM001,10.0,2024-01-05\n";
        let err = parse_transactions(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "transaction_id"));
    }

    #[test]
    fn optional_columns_may_be_absent_entirely() {
        let csv = "\
merchant_id,transaction_id,amount,transaction_date
M001,T0001,10.0,2024-01-05
";
        let txs = parse_transactions(csv.as_bytes()).unwrap();
        assert_eq!(txs[0].category, None);
        assert_eq!(txs[0].city, None);
        assert_eq!(txs[0].account_status, None);
    }

    #[test]
    fn bad_date_is_fatal_with_row_number() {
        let csv = "\
merchant_id,transaction_id,amount,transaction_date
M001,T0001,10.0,2024-01-05
M001,T0002,11.0,not-a-date
";
        let err = parse_transactions(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::Date { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("expected Date error, got {other:?}"),
        }
    }

    #[test]
    fn bad_amount_is_fatal() {
        let csv = "\
merchant_id,transaction_id,amount,transaction_date
M001,T0001,ten,2024-01-05
";
        let err = parse_transactions(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Amount { row: 1, .. }));
    }

    #[test]
    fn empty_file_with_header_yields_no_rows() {
        let csv = "merchant_id,transaction_id,amount,transaction_date\n";
        let txs = parse_transactions(csv.as_bytes()).unwrap();
        assert!(txs.is_empty());
    }
}
