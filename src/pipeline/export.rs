// src/pipeline/export.rs

//! Result display and export pipeline.

use crate::error::Result;
use crate::models::{Config, ResultSet, SearchQuery};
use crate::storage::{ResultStorage, WriteMetadata};
use crate::utils::prompt::Operator;
use crate::utils::{report, table};

/// Show the collected records and write them to disk if the operator agrees.
///
/// Returns `None` when the operator declined the export.
pub async fn run_export(
    config: &Config,
    query: &SearchQuery,
    results: &ResultSet,
    operator: &mut dyn Operator,
    storage: &dyn ResultStorage,
) -> Result<Option<WriteMetadata>> {
    if results.is_empty() {
        log::warn!("No job listings were collected");
    } else {
        print!("{}", table::render(results, config.output.preview_length));
    }

    if !operator.confirm_export()? {
        log::info!("Results not saved");
        return Ok(None);
    }

    let meta = storage.write_results(results, &query.file_stem()).await?;
    report::success(&format!(
        "Saved {} records to {} and {} at {}",
        meta.record_count,
        meta.csv_path.display(),
        meta.text_path.display(),
        meta.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    Ok(Some(meta))
}
