//! playdash - Steam library dashboard
//!
//! Resolves a Steam vanity handle, lists the account's owned games, enriches
//! each game with a HowLongToBeat main-story estimate and presents the result
//! as a table, a CSV export and a bar chart of the most played games.
//!
//! # Pipeline
//!
//! Resolver -> Fetcher -> Enricher (once per game) -> Assembler, in order:
//! - Resolution and listing failures stop the run
//! - Enrichment misses leave the estimate empty and never drop a row
//! - Listings and estimates are memoized in bounded caches
//!
//! # Modules
//!
//! - `adapters`: Remote services (Steam Web API, HowLongToBeat)
//! - `core`: Caches, retry and the pipeline stages
//! - `domain`: Data structures (AccountId, OwnedItem, Dataset)
//! - `render`: Table, CSV, chart and progress output
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Build the dashboard and export it
//! STEAM_API_KEY=... playdash dashboard gabelogannewell --export
//!
//! # Show resolved configuration
//! playdash config
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod render;

// Re-export main types at crate root for convenience
pub use adapters::{AccountDirectory, DurationMatch, DurationSource, ResolveOutcome};
pub use core::{Pipeline, PipelineEvent, PipelineOptions};
pub use domain::{AccountHandle, AccountId, Dataset, DatasetRow, OwnedItem, Progress};
pub use error::DashboardError;
