//! CSV sheets with typed cells.
//!
//! Every record of the file is kept, heading rows included, so that row
//! numbers in log lines match the spreadsheet the CSV was exported from.
//! Cell text is kept verbatim; only cable-ID parsing trims.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A typed spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    /// A cell whose text parses as a number. The raw text is kept for display.
    Number { value: f64, raw: String },
    Text(String),
}

impl Cell {
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            return Cell::Empty;
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Cell::Number {
                value,
                raw: raw.to_string(),
            },
            _ => Cell::Text(raw.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Cell value as text, exactly as it appeared in the sheet.
    pub fn text(&self) -> &str {
        match self {
            Cell::Empty => "",
            Cell::Number { raw, .. } => raw,
            Cell::Text(text) => text,
        }
    }
}

/// One sheet of a workbook.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

static EMPTY: Cell = Cell::Empty;

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Build a sheet from raw cell text, one inner vector per row.
    pub fn from_rows<R, C>(name: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Self {
            name: name.into(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|raw| Cell::from_raw(raw.as_ref())).collect())
                .collect(),
        }
    }

    /// Cell at a 0-based row and 1-based column; out-of-range reads as empty.
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        if column == 0 {
            return &EMPTY;
        }
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column - 1))
            .unwrap_or(&EMPTY)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Sheets read from one input path.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    /// File name of the input, used for site derivation.
    pub name: String,
    pub sheets: Vec<Sheet>,
}

/// Read one CSV file as a sheet named after the file stem.
pub fn read_sheet(path: &Path) -> Result<Sheet> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let mut sheet = Sheet::new(name);
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<Cell> = record
            .iter()
            .map(|raw| Cell::from_raw(raw.trim_start_matches('\u{feff}')))
            .collect();
        sheet.rows.push(row);
    }
    Ok(sheet)
}
