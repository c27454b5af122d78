//! Data layer — CSV loading and the fingerprinted table cache.

pub mod cache;
pub mod loader;

pub use cache::TableCache;
pub use loader::{load_transactions, LoadError};
