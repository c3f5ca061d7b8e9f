//! Local filesystem storage implementation.
//!
//! ## Text layout
//!
//! ```text
//! Title: Data Engineer
//! Company: Acme
//! Location: Remote
//! Link: https://...
//! Description: ...
//!
//! --------------------------------------------------
//!
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::{JobRecord, ResultSet};
use crate::storage::{ResultStorage, WriteMetadata};

const DEFAULT_RULE_WIDTH: usize = 50;

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
    rule_width: usize,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            rule_width: DEFAULT_RULE_WIDTH,
        }
    }

    /// Override the width of the rule between text blocks.
    pub fn with_rule_width(mut self, rule_width: usize) -> Self {
        self.rule_width = rule_width;
        self
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.path(key);
        tokio::fs::create_dir_all(&self.root_dir).await?;

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(path)
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    fn render_text(&self, results: &ResultSet) -> String {
        let rule = "-".repeat(self.rule_width);
        results
            .iter()
            .map(|r| {
                format!(
                    "Title: {}\nCompany: {}\nLocation: {}\nLink: {}\nDescription: {}\n\n{rule}\n\n",
                    r.title, r.company, r.location, r.link, r.description
                )
            })
            .collect()
    }
}

/// Serialize records as CSV with a `Title,Location,Company,Link,Description`
/// header.
pub fn to_csv(results: &ResultSet) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(["Title", "Location", "Company", "Link", "Description"])?;
    for record in results {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))
}

/// Parse CSV produced by [`to_csv`].
pub fn from_csv(bytes: &[u8]) -> Result<ResultSet> {
    let mut reader = csv::Reader::from_reader(bytes);
    let records = reader
        .deserialize::<JobRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(ResultSet::from(records))
}

#[async_trait]
impl ResultStorage for LocalStorage {
    async fn write_results(&self, results: &ResultSet, stem: &str) -> Result<WriteMetadata> {
        let csv_path = self
            .write_bytes(&format!("{stem}.csv"), &to_csv(results)?)
            .await?;
        log::info!("Wrote {} records to {}", results.len(), csv_path.display());

        let text_path = self
            .write_bytes(&format!("{stem}.txt"), self.render_text(results).as_bytes())
            .await?;
        log::info!("Wrote {} records to {}", results.len(), text_path.display());

        Ok(WriteMetadata {
            record_count: results.len(),
            csv_path,
            text_path,
            timestamp: Utc::now(),
        })
    }

    async fn load_results(&self, stem: &str) -> Result<ResultSet> {
        let key = format!("{stem}.csv");
        match self.read_bytes(&key).await? {
            Some(bytes) => from_csv(&bytes),
            None => Err(AppError::validation(format!(
                "No export found at {}",
                self.path(&key).display()
            ))),
        }
    }
}
