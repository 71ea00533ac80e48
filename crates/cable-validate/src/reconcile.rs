//! Reconciliation of the cable list against a network diagram inventory.
//!
//! Hosts are compared first. Ports are compared per host only when both
//! sources list the same hosts, so a missing host is reported once instead of
//! as a port difference on every cable.

use std::collections::{BTreeMap, BTreeSet};

use cable_model::{DiagramInventory, RuleOutcome};

use crate::relations::HostPortUsage;
use crate::rules::{RuleContext, RuleId};

/// Port sets of one host that differ between the sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortDifference {
    pub diagram_only: BTreeSet<String>,
    pub cable_only: BTreeSet<String>,
}

impl PortDifference {
    /// Ports listed by exactly one source.
    pub fn symmetric(&self) -> BTreeSet<&str> {
        self.diagram_only
            .iter()
            .chain(&self.cable_only)
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub diagram_only_hosts: BTreeSet<String>,
    pub cable_only_hosts: BTreeSet<String>,
    pub ports: BTreeMap<String, PortDifference>,
}

impl Reconciliation {
    pub fn is_clean(&self) -> bool {
        self.diagram_only_hosts.is_empty() && self.cable_only_hosts.is_empty() && self.ports.is_empty()
    }

    /// Hosts listed by exactly one source.
    pub fn host_difference(&self) -> BTreeSet<&str> {
        self.diagram_only_hosts
            .iter()
            .chain(&self.cable_only_hosts)
            .map(String::as_str)
            .collect()
    }
}

pub fn reconcile(diagram: &DiagramInventory, usage: &HostPortUsage) -> Reconciliation {
    let diagram_hosts = diagram.host_set();
    let cable_hosts = usage.host_set();
    let mut result = Reconciliation {
        diagram_only_hosts: diagram_hosts
            .difference(&cable_hosts)
            .map(|host| host.to_string())
            .collect(),
        cable_only_hosts: cable_hosts
            .difference(&diagram_hosts)
            .map(|host| host.to_string())
            .collect(),
        ports: BTreeMap::new(),
    };
    if !result.diagram_only_hosts.is_empty() || !result.cable_only_hosts.is_empty() {
        return result;
    }
    let empty = BTreeSet::new();
    for host in diagram_hosts {
        let diagram_ports = diagram.ports(host).unwrap_or(&empty);
        let cable_ports = usage.ports(host).unwrap_or(&empty);
        let difference = PortDifference {
            diagram_only: diagram_ports.difference(cable_ports).cloned().collect(),
            cable_only: cable_ports.difference(diagram_ports).cloned().collect(),
        };
        if !difference.diagram_only.is_empty() || !difference.cable_only.is_empty() {
            result.ports.insert(host.to_string(), difference);
        }
    }
    result
}

fn braced<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    format!("{{{}}}", items.into_iter().collect::<Vec<_>>().join(", "))
}

fn owned_braced(items: &BTreeSet<String>) -> String {
    braced(items.iter().map(String::as_str))
}

pub fn check(ctx: &RuleContext<'_>) -> RuleOutcome {
    let mut outcome = RuleId::DiagramReconciliation.outcome();
    let Some(diagram) = ctx.diagram else {
        outcome.info("no diagram supplied; reconciliation skipped");
        return outcome;
    };
    let result = reconcile(diagram, &ctx.relations.usage);
    if !result.diagram_only_hosts.is_empty() || !result.cable_only_hosts.is_empty() {
        outcome.error(format!(
            "host difference {}: diagram only {}, cable list only {}",
            braced(result.host_difference()),
            owned_braced(&result.diagram_only_hosts),
            owned_braced(&result.cable_only_hosts)
        ));
    }
    for (host, difference) in &result.ports {
        outcome.error(format!(
            "host {host} port difference {}: diagram only {}, cable list only {}",
            braced(difference.symmetric()),
            owned_braced(&difference.diagram_only),
            owned_braced(&difference.cable_only)
        ));
    }
    outcome
}
