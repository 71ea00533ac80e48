//! Input discovery: a single CSV file or a directory of CSV sheets.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::sheet::{Workbook, read_sheet};

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::InputNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Read an input path as a workbook.
///
/// A file is a workbook with one sheet; a directory is a workbook whose
/// sheets are its CSV files in file-name order. A directory without CSV files
/// is an error because the cable sheet is required.
pub fn read_workbook(path: &Path) -> Result<Workbook> {
    if !path.exists() {
        return Err(IngestError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let files = if path.is_dir() {
        list_csv_files(path)?
    } else {
        vec![path.to_path_buf()]
    };
    if files.is_empty() {
        return Err(IngestError::NoSheets {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = Workbook {
        name,
        sheets: Vec::with_capacity(files.len()),
    };
    for file in &files {
        let sheet = read_sheet(file)?;
        info!(
            sheet = %sheet.name,
            last_row = sheet.row_count(),
            last_column = sheet.column_count(),
            "read sheet"
        );
        workbook.sheets.push(sheet);
    }
    debug!(workbook = %workbook.name, sheets = workbook.sheets.len(), "read workbook");
    Ok(workbook)
}
