//! Multiple connections between the same pair of hosts.
//!
//! Several cables between two hosts may be deliberate (link aggregation) or a
//! data entry mistake, so the run asks an operator through a
//! [`ConfirmationProvider`] instead of deciding itself.

use std::collections::{BTreeMap, BTreeSet};

use cable_model::{CablePort, RuleOutcome};
use tracing::info;

use crate::rules::RuleId;

/// Answers the yes/no question raised by the escalation rule.
pub trait ConfirmationProvider {
    /// Blocks until an answer is available. `true` accepts the connections.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Provider that always gives the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAnswer(pub bool);

impl ConfirmationProvider for AutoAnswer {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

/// Two or more distinct connections between one pair of hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionGroup {
    /// Host pair, lower name first.
    pub hosts: (String, String),
    /// Each connection as `a&1 <-> b&2`, endpoints ordered.
    pub connections: BTreeSet<String>,
}

fn ordered(a: String, b: String) -> (String, String) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Host pairs joined by more than one connection, over connect rows with a
/// to-host. A cable listed from both ends counts once.
pub fn find_multiple_connections(records: &[CablePort]) -> Vec<ConnectionGroup> {
    let mut pairs: BTreeMap<(String, String), BTreeSet<String>> = BTreeMap::new();
    for record in records {
        if !record.is_connect() || record.to.host_name.is_empty() {
            continue;
        }
        let hosts = ordered(record.from.host_name.clone(), record.to.host_name.clone());
        let (a, b) = ordered(record.from_endpoint(), record.to_endpoint());
        pairs.entry(hosts).or_default().insert(format!("{a} <-> {b}"));
    }
    pairs
        .into_iter()
        .filter(|(_, connections)| connections.len() >= 2)
        .map(|(hosts, connections)| ConnectionGroup { hosts, connections })
        .collect()
}

/// Operator prompt listing every group.
pub fn prompt(groups: &[ConnectionGroup]) -> String {
    let mut text = String::from("Multiple connections between the same hosts:\n");
    for group in groups {
        let connections: Vec<&str> = group.connections.iter().map(String::as_str).collect();
        text.push_str(&format!(
            "  {} - {}: {}\n",
            group.hosts.0,
            group.hosts.1,
            connections.join(", ")
        ));
    }
    text.push_str("Are these connections intended?");
    text
}

/// Outcome when earlier rules failed and the question is not asked.
pub fn skipped() -> RuleOutcome {
    let mut outcome = RuleId::MultipleConnection.outcome();
    outcome.info("skipped because earlier checks failed");
    outcome
}

/// Ask the provider about `groups` and record the answer.
pub fn resolve(groups: &[ConnectionGroup], provider: &mut dyn ConfirmationProvider) -> RuleOutcome {
    let mut outcome = RuleId::MultipleConnection.outcome();
    if groups.is_empty() {
        return outcome;
    }
    for group in groups {
        outcome.warning(format!(
            "{} connections between {} and {}",
            group.connections.len(),
            group.hosts.0,
            group.hosts.1
        ));
    }
    let confirmed = provider.confirm(&prompt(groups));
    info!(confirmed, groups = groups.len(), "multiple connection confirmation");
    if confirmed {
        outcome.info("multiple connections confirmed by operator");
    } else {
        outcome.info("multiple connections not confirmed by operator");
        outcome.fail();
    }
    outcome
}
