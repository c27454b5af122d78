//! Domain types — transaction records and calendar-month keys.

mod transaction;

pub use transaction::{Transaction, YearMonth};
