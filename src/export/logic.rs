// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::xlsx::export_xlsx;
use crate::history::{HistoryStore, filter_records, parse_range};
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// High level export of the mood history.
pub struct ExportLogic;

impl ExportLogic {
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or YYYY / YYYY-MM / YYYY-MM-DD, optionally
    ///   as a `start:end` pair
    ///
    /// Returns the number of exported records.
    pub fn export(
        store: &HistoryStore,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        let bounds = match range {
            None => None,
            Some(r) => parse_range(r)?,
        };

        let records = filter_records(store.load_all()?, bounds);

        if records.is_empty() {
            warning("No mood records found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();

        log::info!(
            "exporting {} records as {} to {}",
            rows.len(),
            format.as_str(),
            path.display()
        );

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(rows.len())
    }
}
