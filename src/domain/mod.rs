//! Domain types for the dashboard.
//!
//! This module contains the core data structures:
//! - Account: handles and resolved account ids
//! - Library: owned items as returned by the library service
//! - Dataset: enriched, sorted rows ready for presentation

pub mod account;
pub mod dataset;
pub mod library;

// Re-export commonly used types
pub use account::{AccountHandle, AccountId};
pub use dataset::{playtime_hours, Dataset, DatasetRow, Progress, DEFAULT_CHART_ROWS};
pub use library::OwnedItem;
