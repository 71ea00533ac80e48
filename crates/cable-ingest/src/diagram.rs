//! Diagram inventory ingestion.

use std::path::Path;

use cable_config::DiagramLayout;
use cable_model::DiagramInventory;
use tracing::{debug, info};

use crate::error::Result;
use crate::sheet::{Sheet, read_sheet};

/// Read the host/used-ports table exported from the network diagram.
pub fn read_diagram(path: &Path, layout: &DiagramLayout) -> Result<DiagramInventory> {
    let sheet = read_sheet(path)?;
    let inventory = diagram_from_sheet(&sheet, layout);
    info!(
        path = %path.display(),
        hosts = inventory.len(),
        "read diagram inventory"
    );
    Ok(inventory)
}

/// Build an inventory from a sheet.
///
/// The first `header_rows` rows and rows with an empty host cell are ignored.
/// Port tokens are trimmed and empty tokens dropped; a host listed on several
/// rows collects all ports.
pub fn diagram_from_sheet(sheet: &Sheet, layout: &DiagramLayout) -> DiagramInventory {
    let mut inventory = DiagramInventory::new();
    for row in layout.header_rows..sheet.row_count() {
        let host = sheet.cell(row, layout.host_column).text();
        if host.is_empty() {
            continue;
        }
        inventory.add_host(host);
        let ports = sheet.cell(row, layout.ports_column).text();
        for port in ports.split(layout.port_delimiter.as_str()) {
            let port = port.trim();
            if port.is_empty() {
                continue;
            }
            inventory.add_port(host, port);
        }
        debug!(sheet = %sheet.name, row = row + 1, host, ports, "diagram row");
    }
    inventory
}
