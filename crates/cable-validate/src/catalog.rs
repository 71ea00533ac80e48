//! Lookup tables built from configuration: the model/port catalog and the
//! device-to-hostname substring table.
//!
//! Both tables accept structured TOML entries and a legacy delimiter-encoded
//! string. Structured entries are read first; a later entry for a key already
//! present is dropped. Malformed legacy entries are skipped.

use std::collections::{BTreeMap, BTreeSet};

use cable_config::{CatalogConfig, DeviceHostConfig, DeviceHostEntry, ModelPortEntry};
use tracing::debug;

use crate::relations::{Insertion, insert_unique};

/// Allowed port names per model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelPortCatalog {
    models: BTreeMap<String, BTreeSet<String>>,
}

impl ModelPortCatalog {
    pub fn from_config(config: &CatalogConfig) -> Self {
        let legacy = Self::parse_legacy(&config.model_and_port_name);
        Self::from_entries(config.models.iter().cloned().chain(legacy))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = ModelPortEntry>) -> Self {
        let mut models = BTreeMap::new();
        for entry in entries {
            let ports: BTreeSet<String> = entry.ports.into_iter().collect();
            if let Insertion::AlreadyPresent(_) = insert_unique(&mut models, entry.model.clone(), ports)
            {
                debug!(model = %entry.model, "duplicate catalog model dropped");
            }
        }
        Self { models }
    }

    /// Decode `model|port;port,model|port`.
    pub fn parse_legacy(encoded: &str) -> Vec<ModelPortEntry> {
        if encoded.is_empty() {
            return Vec::new();
        }
        let mut entries = Vec::new();
        for item in encoded.split(',') {
            let Some((model, ports)) = item.split_once('|') else {
                debug!(entry = item, "catalog entry without '|' skipped");
                continue;
            };
            if model.is_empty() {
                debug!(entry = item, "catalog entry without model skipped");
                continue;
            }
            entries.push(ModelPortEntry {
                model: model.to_string(),
                ports: ports
                    .split(';')
                    .filter(|port| !port.is_empty())
                    .map(str::to_string)
                    .collect(),
            });
        }
        entries
    }

    pub fn ports(&self, model: &str) -> Option<&BTreeSet<String>> {
        self.models.get(model)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Substring each device's hostname must contain, keyed by device name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceHostTable {
    substrings: BTreeMap<String, String>,
}

impl DeviceHostTable {
    pub fn from_config(config: &DeviceHostConfig) -> Self {
        let legacy = Self::parse_legacy(&config.word_device_to_host_name_list);
        Self::from_entries(config.entries.iter().cloned().chain(legacy))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = DeviceHostEntry>) -> Self {
        let mut substrings = BTreeMap::new();
        for entry in entries {
            if let Insertion::AlreadyPresent(kept) =
                insert_unique(&mut substrings, entry.device.clone(), entry.host_substring)
            {
                debug!(device = %entry.device, kept = %kept, "duplicate device entry dropped");
            }
        }
        Self { substrings }
    }

    /// Decode `device/substring,device/substring`.
    pub fn parse_legacy(encoded: &str) -> Vec<DeviceHostEntry> {
        if encoded.is_empty() {
            return Vec::new();
        }
        encoded
            .split(',')
            .filter_map(|item| match item.split_once('/') {
                Some((device, substring)) => Some(DeviceHostEntry {
                    device: device.to_string(),
                    host_substring: substring.to_string(),
                }),
                None => {
                    debug!(entry = item, "device entry without '/' skipped");
                    None
                }
            })
            .collect()
    }

    pub fn substring(&self, device: &str) -> Option<&str> {
        self.substrings.get(device).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.substrings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substrings.is_empty()
    }
}
