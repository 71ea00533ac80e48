//! Port naming checked against the model catalog, and the key-port column
//! against the port column.

use cable_model::{CablePort, RuleOutcome};

use super::{RuleContext, RuleId};
use crate::catalog::ModelPortCatalog;
use crate::ignore::IgnoreSet;

pub fn check_model_port(ctx: &RuleContext<'_>) -> RuleOutcome {
    let mut outcome = RuleId::ModelPort.outcome();
    let catalog = ModelPortCatalog::from_config(&ctx.config.catalog);
    let ignore = IgnoreSet::parse(&ctx.config.ignore.model_port);
    for record in ctx.records {
        if let Some(message) =
            port_fault(&catalog, &record.from.model_name, &record.from.port_name)
        {
            outcome.error_for(record.cable_id, format!("cable {}: from {message}", record.cable_id));
        }
        if to_side_present(record)
            && !ignore.contains(&record.to.model_name)
            && let Some(message) = port_fault(&catalog, &record.to.model_name, &record.to.port_name)
        {
            outcome.error_for(record.cable_id, format!("cable {}: to {message}", record.cable_id));
        }
    }
    outcome
}

/// Connect rows always carry a to-side; disconnect rows only when a to-model
/// is filled in.
fn to_side_present(record: &CablePort) -> bool {
    record.is_connect() || !record.to.model_name.is_empty()
}

fn port_fault(catalog: &ModelPortCatalog, model: &str, port: &str) -> Option<String> {
    match catalog.ports(model) {
        None => Some(format!("model '{model}' is not in the catalog")),
        Some(ports) if !ports.contains(port) => {
            Some(format!("port '{port}' is not a port of model '{model}'"))
        }
        Some(_) => None,
    }
}

pub fn check_key_port(ctx: &RuleContext<'_>) -> RuleOutcome {
    let mut outcome = RuleId::KeyPort.outcome();
    for record in ctx.records {
        if record.from.key_port_name != record.from.port_name {
            outcome.error_for(
                record.cable_id,
                format!(
                    "cable {}: key port '{}' differs from port '{}'",
                    record.cable_id, record.from.key_port_name, record.from.port_name
                ),
            );
        }
    }
    outcome
}
