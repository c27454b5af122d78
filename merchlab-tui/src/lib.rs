//! MerchLab TUI — terminal dashboard for merchant growth metrics.
//!
//! Three panels over one shared state:
//! - Filters — date window, categorical filters, ranking and click mode
//! - Chart — ranked bar chart of average QoQ growth
//! - Table — conditionally formatted summary table, linked to chart clicks
//!
//! Everything runs on the main thread; every interaction recomputes the
//! summary from the immutable transaction table.

pub mod app;
pub mod navigation;
pub mod panels;
pub mod persistence;
pub mod sample_data;
pub mod theme;

pub use app::{App, Panel};
pub use navigation::handle_key_event;
pub use theme::Theme;
