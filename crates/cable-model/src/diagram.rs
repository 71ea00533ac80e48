//! Host/port inventory taken from the network diagram.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Hostname to the set of ports the diagram declares as used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramInventory {
    hosts: BTreeMap<String, BTreeSet<String>>,
}

impl DiagramInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a host with no ports yet. Existing ports are kept.
    pub fn add_host(&mut self, host: impl Into<String>) {
        self.hosts.entry(host.into()).or_default();
    }

    pub fn add_port(&mut self, host: impl Into<String>, port: impl Into<String>) {
        self.hosts.entry(host.into()).or_default().insert(port.into());
    }

    pub fn with_ports<I, S>(mut self, host: &str, ports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_host(host);
        for port in ports {
            self.add_port(host, port);
        }
        self
    }

    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.hosts.keys().map(String::as_str)
    }

    pub fn host_set(&self) -> BTreeSet<&str> {
        self.hosts().collect()
    }

    pub fn ports(&self, host: &str) -> Option<&BTreeSet<String>> {
        self.hosts.get(host)
    }

    pub fn as_map(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.hosts
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
