use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, record_to_row};
use crate::export::{RecordExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSON array of rows, same field names as the CSV header.
pub(crate) fn export_json(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting {} records to JSON: {}", rows.len(), path.display()));

    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, rows)?;
    out.flush()?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with the column order shared with the XLSX sheet.
pub(crate) fn export_csv(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting {} records to CSV: {}", rows.len(), path.display()));

    let mut wtr = csv::Writer::from_path(path).map_err(csv_error)?;
    wtr.write_record(get_headers()).map_err(csv_error)?;
    for row in rows {
        wtr.write_record(record_to_row(row)).map_err(csv_error)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::Export(format!("CSV: {e}"))
}
