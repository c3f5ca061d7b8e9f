// src/models/mod.rs

//! Domain models for the job crawler.

mod config;
mod job;
mod search;
mod selectors;

// Re-export all public types
pub use config::{BrowserConfig, Config, CrawlerConfig, LoggingConfig, OutputConfig, SearchConfig};
pub use job::{JobListing, JobRecord, ResultSet};
pub use search::SearchQuery;
pub use selectors::JobSelectors;

use chrono::{DateTime, Utc};

/// Timing and volume of one search run.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub pages_visited: usize,
    pub record_count: usize,
    pub described_count: usize,
}

impl RunStats {
    pub fn elapsed_secs(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }
}
