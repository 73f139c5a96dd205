//! Core pipeline logic.
//!
//! This module contains:
//! - Cache: bounded memoization used by the fetcher and the enricher
//! - Retry: backoff for the terminal remote calls
//! - Resolver, Fetcher, Enricher, Assembler: the pipeline stages
//! - Pipeline: explicit invocation of all stages in order

pub mod assembler;
pub mod cache;
pub mod enricher;
pub mod fetcher;
pub mod pipeline;
pub mod resolver;
pub mod retry;

// Re-export commonly used types
pub use assembler::assemble;
pub use cache::{BoundedCache, CacheStats};
pub use enricher::DurationEnricher;
pub use fetcher::{LibraryFetcher, LibraryKey};
pub use pipeline::{Pipeline, PipelineEvent, PipelineOptions};
pub use resolver::resolve;
pub use retry::RetryPolicy;
