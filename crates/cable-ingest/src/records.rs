//! Record acceptance.
//!
//! A row becomes a [`CablePort`] when its connect cell holds exactly one of
//! the configured words. Rows whose cable ID cannot be read are skipped with a
//! warning and excluded from every later check.

use std::fmt;

use cable_config::{CheckConfig, ColumnLayout};
use cable_model::{CableId, CablePort, ConnectState, FromSide, ToSide};
use tracing::{trace, warn};

use crate::sheet::{Cell, Sheet, Workbook};

/// Why a row was dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Numeric cell with a fractional or out-of-range value.
    NotInteger(f64),
    /// Text cell that does not parse as an integer.
    NotNumericText(String),
    /// Empty cable-ID cell.
    Missing,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInteger(value) => write!(f, "cable ID {value} is not an integer"),
            Self::NotNumericText(text) => write!(f, "cable ID '{text}' is not numeric text"),
            Self::Missing => f.write_str("cable ID is neither a number nor text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub sheet: String,
    /// 1-based row number.
    pub row: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default)]
pub struct IngestOutcome {
    pub records: Vec<CablePort>,
    pub skipped: Vec<SkippedRow>,
}

/// Read a cable ID from a numeric or numeric-text cell.
pub fn parse_cable_id(cell: &Cell) -> Result<CableId, SkipReason> {
    match cell {
        Cell::Number { value, .. } => {
            let in_range = *value >= CableId::MIN as f64 && *value < CableId::MAX as f64;
            if value.fract() == 0.0 && in_range {
                Ok(*value as CableId)
            } else {
                Err(SkipReason::NotInteger(*value))
            }
        }
        Cell::Text(text) => text
            .trim()
            .parse::<CableId>()
            .map_err(|_| SkipReason::NotNumericText(text.clone())),
        Cell::Empty => Err(SkipReason::Missing),
    }
}

/// Turn one sheet row into a record.
///
/// Returns `Ok(None)` for rows that are not cable rows (connect cell empty or
/// holding another word) and `Err` for cable rows whose ID is unusable.
pub fn accept_row(
    row: &[Cell],
    config: &CheckConfig,
) -> Result<Option<CablePort>, SkipReason> {
    let columns = &config.columns;
    let connect_cell = column(row, Some(columns.connect));
    if connect_cell.is_empty() {
        return Ok(None);
    }
    let Some(state) = ConnectState::from_words(
        connect_cell.text(),
        &config.words.connect,
        &config.words.disconnect,
    ) else {
        return Ok(None);
    };
    let cable_id = parse_cable_id(column(row, Some(columns.cable_id)))?;
    let record = CablePort::new(cable_id, state)
        .with_from(from_side(row, columns))
        .with_to(to_side(row, columns));
    Ok(Some(record))
}

/// Accept every cable row of every sheet, in sheet then row order.
pub fn accept_workbook(workbook: &Workbook, config: &CheckConfig) -> IngestOutcome {
    let mut outcome = IngestOutcome::default();
    for sheet in &workbook.sheets {
        accept_sheet(sheet, config, &mut outcome);
    }
    for record in &outcome.records {
        trace!(
            cable_id = record.cable_id,
            connect = %record.connect_state,
            from_device = %record.from.device_name,
            from_host = %record.from.host_name,
            from_model = %record.from.model_name,
            from_port = %record.from.port_name,
            to_device = %record.to.device_name,
            to_host = %record.to.host_name,
            to_model = %record.to.model_name,
            to_port = %record.to.port_name,
            "record"
        );
    }
    outcome
}

fn accept_sheet(sheet: &Sheet, config: &CheckConfig, outcome: &mut IngestOutcome) {
    for (index, row) in sheet.rows.iter().enumerate() {
        let row_number = index + 1;
        match accept_row(row, config) {
            Ok(Some(record)) => outcome.records.push(record),
            Ok(None) => {}
            Err(reason) => {
                warn!(sheet = %sheet.name, row = row_number, "skipped row: {reason}");
                outcome.skipped.push(SkippedRow {
                    sheet: sheet.name.clone(),
                    row: row_number,
                    reason,
                });
            }
        }
    }
}

static EMPTY: Cell = Cell::Empty;

fn column(row: &[Cell], index: Option<usize>) -> &Cell {
    match index {
        Some(index) if index > 0 => row.get(index - 1).unwrap_or(&EMPTY),
        _ => &EMPTY,
    }
}

fn text(row: &[Cell], index: Option<usize>) -> String {
    column(row, index).text().to_string()
}

fn from_side(row: &[Cell], columns: &ColumnLayout) -> FromSide {
    FromSide {
        floor: text(row, columns.from_floor),
        device_name: text(row, columns.from_device_name),
        device_number: text(row, columns.from_device_number),
        model_name: text(row, columns.from_model_name),
        host_name: text(row, columns.from_host_name),
        port_name: text(row, columns.from_port_name),
        connector_name: text(row, columns.from_connector_name),
        key_port_name: text(row, columns.from_key_port_name),
    }
}

fn to_side(row: &[Cell], columns: &ColumnLayout) -> ToSide {
    ToSide {
        floor: text(row, columns.to_floor),
        device_name: text(row, columns.to_device_name),
        device_number: text(row, columns.to_device_number),
        model_name: text(row, columns.to_model_name),
        host_name: text(row, columns.to_host_name),
        port_name: text(row, columns.to_port_name),
    }
}
