//! Storage abstractions for exporting results.
//!
//! A run is exported as two sibling files sharing one stem:
//!
//! ```text
//! {output_dir}/
//! ├── {title}_{location}_jobs.csv   # Title,Location,Company,Link,Description
//! └── {title}_{location}_jobs.txt   # labelled blocks separated by a rule
//! ```

pub mod local;

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::ResultSet;

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a storage write operation.
#[derive(Debug, Clone)]
pub struct WriteMetadata {
    /// Number of records written to each file
    pub record_count: usize,
    pub csv_path: PathBuf,
    pub text_path: PathBuf,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Trait for result export backends.
#[async_trait]
pub trait ResultStorage: Send + Sync {
    /// Write the results as CSV and plain text under `stem`.
    async fn write_results(&self, results: &ResultSet, stem: &str) -> Result<WriteMetadata>;

    /// Read a previously written CSV export back.
    async fn load_results(&self, stem: &str) -> Result<ResultSet>;
}
