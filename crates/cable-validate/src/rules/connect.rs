//! Connect-row pairing: every connect row names a to-side, and every cable
//! listed from one end is listed back from the other.

use cable_model::RuleOutcome;

use super::{RuleContext, RuleId};
use crate::ignore::IgnoreSet;

pub fn check_requires_to(ctx: &RuleContext<'_>) -> RuleOutcome {
    let mut outcome = RuleId::ConnectRequiresTo.outcome();
    let ignore = IgnoreSet::parse(&ctx.config.ignore.connect_x_connect);
    for record in ctx.records.iter().filter(|record| record.is_connect()) {
        if record.to.host_name.is_empty() && !ignore.contains(&record.from.connector_name) {
            outcome.error_for(
                record.cable_id,
                format!(
                    "cable {}: connect row from {} has no to hostname",
                    record.cable_id,
                    record.from_endpoint()
                ),
            );
        }
    }
    outcome
}

/// The connect map must be an involution without fixed points.
pub fn check_connect_x_connect(ctx: &RuleContext<'_>) -> RuleOutcome {
    let mut outcome = RuleId::ConnectXConnect.outcome();
    let connects = &ctx.relations.connects;
    for collision in &connects.collisions {
        outcome.error_for(
            collision.cable_id,
            format!(
                "cable {}: From({}) already connects to ({}), also listed to ({})",
                collision.cable_id, collision.from, collision.existing, collision.new
            ),
        );
    }
    for fault in connects.symmetry_faults() {
        outcome.error(fault.to_string());
    }
    outcome
}
