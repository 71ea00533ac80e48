//! One hostname per device and one device per hostname.

use cable_model::RuleOutcome;

use super::{RuleContext, RuleId};

pub fn check(ctx: &RuleContext<'_>) -> RuleOutcome {
    let mut outcome = RuleId::DeviceHostBijection.outcome();
    let hosts = &ctx.relations.hosts;
    for conflict in &hosts.conflicts {
        outcome.error_for(
            conflict.cable_id(),
            format!("cable {}: {conflict}", conflict.cable_id()),
        );
    }
    for fault in hosts.round_trip_faults() {
        outcome.error(format!("round trip failed: {fault}"));
    }
    outcome
}
