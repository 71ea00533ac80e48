use cable_model::RuleOutcome;

use super::{RuleContext, RuleId};

/// Each cable ID may appear on one record only.
pub fn check(ctx: &RuleContext<'_>) -> RuleOutcome {
    let mut outcome = RuleId::DuplicateCableId.outcome();
    for duplicate in &ctx.relations.cable_ids.duplicates {
        outcome.error_for(
            duplicate.cable_id,
            format!(
                "cable ID {} is duplicated: {} and {}",
                duplicate.cable_id, duplicate.first, duplicate.duplicate
            ),
        );
    }
    outcome
}
