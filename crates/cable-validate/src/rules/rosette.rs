//! Rosette hostnames: unique across cables, and carrying the site number.

use cable_model::RuleOutcome;

use super::{RuleContext, RuleId};

pub fn check_unique(ctx: &RuleContext<'_>) -> RuleOutcome {
    let mut outcome = RuleId::RosetteUnique.outcome();
    for collision in &ctx.relations.rosettes.collisions {
        outcome.error_for(
            collision.second,
            format!(
                "rosette hostname '{}' is used by cables {} and {}",
                collision.host, collision.first, collision.second
            ),
        );
    }
    outcome
}

pub fn check_site_number(ctx: &RuleContext<'_>) -> RuleOutcome {
    let mut outcome = RuleId::RosetteSiteNumber.outcome();
    let members = &ctx.relations.rosettes.members;
    if members.is_empty() {
        return outcome;
    }
    let Some(number) = ctx.site.number.as_deref() else {
        outcome.error(format!(
            "no site number could be derived from the file name; {} rosette rows unchecked",
            members.len()
        ));
        return outcome;
    };
    for row in members {
        if !row.host.contains(number) {
            outcome.error_for(
                row.cable_id,
                format!(
                    "cable {}: rosette hostname '{}' does not contain site number '{number}'",
                    row.cable_id, row.host
                ),
            );
        }
    }
    outcome
}
