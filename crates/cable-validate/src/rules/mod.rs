//! The validation rules.
//!
//! Each rule is a function from a [`RuleContext`] to a
//! [`cable_model::RuleOutcome`]. Rules never touch each other's results; the
//! engine runs them in [`RuleId::ORDER`] and folds the outcomes.

pub mod bijection;
pub mod cable_id;
pub mod connect;
pub mod host_name;
pub mod model_port;
pub mod rosette;

use std::fmt;

use cable_config::CheckConfig;
use cable_model::{CablePort, DiagramInventory, RuleOutcome};

use crate::relations::Relations;
use crate::site::Site;

/// Everything a rule may read.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub records: &'a [CablePort],
    pub relations: &'a Relations,
    pub config: &'a CheckConfig,
    /// Hostname prefix expected on every host.
    pub prefix: &'a str,
    pub site: &'a Site,
    pub diagram: Option<&'a DiagramInventory>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    DuplicateCableId,
    ConnectRequiresTo,
    HostNameLength,
    HostNameSuffix,
    HostNamePrefix,
    DeviceHostName,
    DeviceHostBijection,
    ModelPort,
    KeyPort,
    ConnectXConnect,
    DiagramReconciliation,
    RosetteUnique,
    RosetteSiteNumber,
    MultipleConnection,
}

impl RuleId {
    /// Execution and report order.
    pub const ORDER: [RuleId; 14] = [
        RuleId::DuplicateCableId,
        RuleId::ConnectRequiresTo,
        RuleId::HostNameLength,
        RuleId::HostNameSuffix,
        RuleId::HostNamePrefix,
        RuleId::DeviceHostName,
        RuleId::DeviceHostBijection,
        RuleId::ModelPort,
        RuleId::KeyPort,
        RuleId::ConnectXConnect,
        RuleId::DiagramReconciliation,
        RuleId::RosetteUnique,
        RuleId::RosetteSiteNumber,
        RuleId::MultipleConnection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::DuplicateCableId => "duplicate-cable-id",
            RuleId::ConnectRequiresTo => "connect-requires-to",
            RuleId::HostNameLength => "host-name-length",
            RuleId::HostNameSuffix => "host-name-suffix",
            RuleId::HostNamePrefix => "host-name-prefix",
            RuleId::DeviceHostName => "device-host-name",
            RuleId::DeviceHostBijection => "device-host-bijection",
            RuleId::ModelPort => "model-port",
            RuleId::KeyPort => "key-port",
            RuleId::ConnectXConnect => "connect-x-connect",
            RuleId::DiagramReconciliation => "diagram-reconciliation",
            RuleId::RosetteUnique => "rosette-unique",
            RuleId::RosetteSiteNumber => "rosette-site-number",
            RuleId::MultipleConnection => "multiple-connection",
        }
    }

    /// Section heading used in the log and the summary table.
    pub fn title(self) -> &'static str {
        match self {
            RuleId::DuplicateCableId => "Duplicate cable ID",
            RuleId::ConnectRequiresTo => "Connect rows have a to-side",
            RuleId::HostNameLength => "Hostname length",
            RuleId::HostNameSuffix => "Hostname numeric suffix",
            RuleId::HostNamePrefix => "Hostname prefix",
            RuleId::DeviceHostName => "Device name in hostname",
            RuleId::DeviceHostBijection => "Device and hostname one-to-one",
            RuleId::ModelPort => "Model and port name",
            RuleId::KeyPort => "Key port name",
            RuleId::ConnectXConnect => "Connect X connect",
            RuleId::DiagramReconciliation => "Diagram reconciliation",
            RuleId::RosetteUnique => "Rosette hostname unique",
            RuleId::RosetteSiteNumber => "Rosette site number",
            RuleId::MultipleConnection => "Multiple connections",
        }
    }

    /// Empty outcome for this rule.
    pub fn outcome(self) -> RuleOutcome {
        RuleOutcome::new(self.as_str(), self.title())
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
