pub mod diagram;
pub mod discovery;
pub mod error;
pub mod records;
pub mod sheet;

pub use diagram::{diagram_from_sheet, read_diagram};
pub use discovery::{list_csv_files, read_workbook};
pub use error::{IngestError, Result};
pub use records::{IngestOutcome, SkipReason, SkippedRow, accept_row, accept_workbook, parse_cable_id};
pub use sheet::{Cell, Sheet, Workbook, read_sheet};
