// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog reports: coverage statistics and their rendering

pub mod formatter;
pub mod output;
pub mod stats;

use crate::types::TsDocument;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub use formatter::ReportFormatter;
pub use output::ReportOutputFormat;
pub use stats::{CatalogStats, ContextStats};

/// Statistics for a parsed document.
pub fn catalog_stats(document: &TsDocument) -> CatalogStats {
    CatalogStats::from_document(document)
}

/// Write any serializable report to `path` in `format`.
pub fn save_report<T: serde::Serialize + ?Sized>(
    value: &T,
    format: ReportOutputFormat,
    path: &Path,
) -> Result<()> {
    let rendered = format.serialize(value)?;
    fs::write(path, rendered).with_context(|| format!("writing report {}", path.display()))
}
