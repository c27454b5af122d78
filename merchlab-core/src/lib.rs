//! MerchLab Core — transaction table, filter stage, growth-metric engine,
//! ranking, selection, and styling.
//!
//! The presentation layer (TUI or CLI) supplies filter parameters and click
//! events; this crate returns ranked summary rows and styled display rows:
//! - CSV loading with column validation and a fingerprinted table cache
//! - Date-range + categorical filter stage
//! - Monthly bucketing and MoM/QoQ/YoY bucket-index growth series
//! - Per-merchant aggregation and CAGR over the filter span
//! - Top/bottom ranking by average QoQ growth
//! - Click-selection coordinator and total styling functions
//!
//! Everything downstream of the load cache is recomputed per interaction;
//! identical inputs always produce identical output.

pub mod config;
pub mod data;
pub mod domain;
pub mod filter;
pub mod metrics;
pub mod ranking;
pub mod selection;
pub mod style;

pub use config::{ConfigError, DashboardConfig, DataConfig};
pub use data::{load_transactions, LoadError, TableCache};
pub use domain::{Transaction, YearMonth};
pub use filter::{filter_transactions, FilterConfig};
pub use metrics::{
    bucket_by_month, cagr, compute_summary, pct_change_by_bucket, summarize_merchant,
    MerchantSummary, MonthlyBucket, MOM_LAG, QOQ_LAG, YOY_LAG,
};
pub use ranking::{rank_summaries, RankDirection, RankingConfig};
pub use selection::{InteractionMode, SelectionCoordinator, SelectionEvent};
pub use style::{
    apply_selection, format_pct, highlight_style, value_style, CellStyle, StyledCell, StyledRow,
};
