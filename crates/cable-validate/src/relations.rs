//! Indexes derived once per run from the accepted records.
//!
//! Every index is built with first-insert-wins semantics: a second value for a
//! key already present is never stored, it is recorded as a collision that the
//! owning rule later reports.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use cable_config::CheckConfig;
use cable_model::{CableId, CablePort};
use tracing::debug;

use crate::ignore::{IgnoreSet, NameSet};

/// Result of [`insert_unique`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion<V> {
    Inserted,
    /// The key was taken; carries the value already stored.
    AlreadyPresent(V),
}

/// Insert `value` unless `key` is present. The map is never overwritten.
pub fn insert_unique<K: Ord, V: Clone>(
    map: &mut BTreeMap<K, V>,
    key: K,
    value: V,
) -> Insertion<V> {
    match map.entry(key) {
        Entry::Occupied(entry) => Insertion::AlreadyPresent(entry.get().clone()),
        Entry::Vacant(entry) => {
            entry.insert(value);
            Insertion::Inserted
        }
    }
}

/// All indexes shared by the rules.
#[derive(Debug, Clone, Default)]
pub struct Relations {
    pub cable_ids: CableIdIndex,
    pub hosts: HostBijection,
    pub connects: ConnectMap,
    pub rosettes: RosetteIndex,
    pub usage: HostPortUsage,
}

impl Relations {
    pub fn build(records: &[CablePort], config: &CheckConfig) -> Self {
        let connect_ignore = IgnoreSet::parse(&config.ignore.connect_x_connect);
        let rosette_devices = NameSet::parse(&config.rosette.device_names);
        let relations = Self {
            cable_ids: CableIdIndex::build(records),
            hosts: HostBijection::build(records),
            connects: ConnectMap::build(records, &connect_ignore),
            rosettes: RosetteIndex::build(records, &rosette_devices),
            usage: HostPortUsage::build(records),
        };
        debug!(
            cable_ids = relations.cable_ids.len(),
            devices = relations.hosts.forward.len(),
            connects = relations.connects.len(),
            rosettes = relations.rosettes.members.len(),
            hosts = relations.usage.len(),
            "relations built"
        );
        relations
    }
}

/// A cable ID seen on more than one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateCableId {
    pub cable_id: CableId,
    /// From-endpoint of the first record with this ID.
    pub first: String,
    pub duplicate: String,
}

/// Cable ID to from-endpoint.
#[derive(Debug, Clone, Default)]
pub struct CableIdIndex {
    endpoints: BTreeMap<CableId, String>,
    pub duplicates: Vec<DuplicateCableId>,
}

impl CableIdIndex {
    pub fn build(records: &[CablePort]) -> Self {
        let mut index = Self::default();
        for record in records {
            let endpoint = record.from_endpoint();
            if let Insertion::AlreadyPresent(first) =
                insert_unique(&mut index.endpoints, record.cable_id, endpoint.clone())
            {
                index.duplicates.push(DuplicateCableId {
                    cable_id: record.cable_id,
                    first,
                    duplicate: endpoint,
                });
            }
        }
        index
    }

    pub fn endpoint(&self, cable_id: CableId) -> Option<&str> {
        self.endpoints.get(&cable_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

/// Device identity: device name plus device number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceKey {
    pub name: String,
    pub number: String,
}

impl DeviceKey {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }
}

impl fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BijectionConflict {
    DeviceHasTwoHosts {
        cable_id: CableId,
        device: DeviceKey,
        existing: String,
        new: String,
    },
    HostHasTwoDevices {
        cable_id: CableId,
        host: String,
        existing: DeviceKey,
        new: DeviceKey,
    },
}

impl BijectionConflict {
    pub fn cable_id(&self) -> CableId {
        match self {
            Self::DeviceHasTwoHosts { cable_id, .. } | Self::HostHasTwoDevices { cable_id, .. } => {
                *cable_id
            }
        }
    }
}

impl fmt::Display for BijectionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceHasTwoHosts {
                device,
                existing,
                new,
                ..
            } => write!(f, "device {device} has hostnames {existing} and {new}"),
            Self::HostHasTwoDevices {
                host,
                existing,
                new,
                ..
            } => write!(f, "hostname {host} is used by devices {existing} and {new}"),
        }
    }
}

/// An entry of one map that does not map back to itself through the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundTripFault {
    Forward {
        device: DeviceKey,
        host: String,
        back: Option<DeviceKey>,
    },
    Inverse {
        host: String,
        device: DeviceKey,
        back: Option<String>,
    },
}

impl fmt::Display for RoundTripFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward { device, host, back } => match back {
                Some(back) => write!(f, "device {device} -> {host} -> device {back}"),
                None => write!(f, "device {device} -> {host} has no reverse entry"),
            },
            Self::Inverse { host, device, back } => match back {
                Some(back) => write!(f, "hostname {host} -> {device} -> hostname {back}"),
                None => write!(f, "hostname {host} -> {device} has no reverse entry"),
            },
        }
    }
}

/// Device-to-hostname map and its inverse.
///
/// The from-side of every record takes part, and the to-side of connect rows
/// with a hostname. Sides with an empty device name or hostname are left out.
#[derive(Debug, Clone, Default)]
pub struct HostBijection {
    pub forward: BTreeMap<DeviceKey, String>,
    pub inverse: BTreeMap<String, DeviceKey>,
    pub conflicts: Vec<BijectionConflict>,
}

impl HostBijection {
    pub fn build(records: &[CablePort]) -> Self {
        let mut bijection = Self::default();
        for record in records {
            bijection.add(
                record.cable_id,
                DeviceKey::new(&record.from.device_name, &record.from.device_number),
                &record.from.host_name,
            );
            if record.is_connect() {
                bijection.add(
                    record.cable_id,
                    DeviceKey::new(&record.to.device_name, &record.to.device_number),
                    &record.to.host_name,
                );
            }
        }
        bijection
    }

    fn add(&mut self, cable_id: CableId, device: DeviceKey, host: &str) {
        if device.name.is_empty() || host.is_empty() {
            return;
        }
        if let Insertion::AlreadyPresent(existing) =
            insert_unique(&mut self.forward, device.clone(), host.to_string())
            && existing != host
        {
            self.conflicts.push(BijectionConflict::DeviceHasTwoHosts {
                cable_id,
                device: device.clone(),
                existing,
                new: host.to_string(),
            });
        }
        if let Insertion::AlreadyPresent(existing) =
            insert_unique(&mut self.inverse, host.to_string(), device.clone())
            && existing != device
        {
            self.conflicts.push(BijectionConflict::HostHasTwoDevices {
                cable_id,
                host: host.to_string(),
                existing,
                new: device,
            });
        }
    }

    /// Entries that fail `inverse[forward[d]] == d` or `forward[inverse[h]] == h`.
    pub fn round_trip_faults(&self) -> Vec<RoundTripFault> {
        let mut faults = Vec::new();
        for (device, host) in &self.forward {
            let back = self.inverse.get(host);
            if back != Some(device) {
                faults.push(RoundTripFault::Forward {
                    device: device.clone(),
                    host: host.clone(),
                    back: back.cloned(),
                });
            }
        }
        for (host, device) in &self.inverse {
            let back = self.forward.get(device);
            if back != Some(host) {
                faults.push(RoundTripFault::Inverse {
                    host: host.clone(),
                    device: device.clone(),
                    back: back.cloned(),
                });
            }
        }
        faults
    }
}

/// A from-endpoint claimed by two connect rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectCollision {
    pub cable_id: CableId,
    pub from: String,
    pub existing: String,
    pub new: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymmetryFault {
    SelfLoop {
        endpoint: String,
    },
    MissingReverse {
        from: String,
        to: String,
    },
    /// The to-endpoint exists but points somewhere other than back.
    Mismatch {
        from: String,
        to: String,
        reverse: String,
    },
}

impl fmt::Display for SymmetryFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop { endpoint } => write!(f, "From({endpoint}) is connected to itself"),
            Self::MissingReverse { from, to } => {
                write!(f, "From({from}) -> To({to}) not found")
            }
            Self::Mismatch { from, to, reverse } => write!(
                f,
                "From({from}) -> To({to}) points back to ({reverse}) instead"
            ),
        }
    }
}

/// `host&port` from-endpoint to `host&port` to-endpoint over connect rows.
///
/// Rows whose to-device is in the connect ignore list are excluded.
#[derive(Debug, Clone, Default)]
pub struct ConnectMap {
    pairs: BTreeMap<String, String>,
    pub collisions: Vec<ConnectCollision>,
    pub excluded: usize,
}

impl ConnectMap {
    pub fn build(records: &[CablePort], ignore: &IgnoreSet) -> Self {
        let mut map = Self::default();
        for record in records.iter().filter(|record| record.is_connect()) {
            if ignore.contains(&record.to.device_name) {
                map.excluded += 1;
                continue;
            }
            let from = record.from_endpoint();
            let to = record.to_endpoint();
            if let Insertion::AlreadyPresent(existing) =
                insert_unique(&mut map.pairs, from.clone(), to.clone())
            {
                map.collisions.push(ConnectCollision {
                    cable_id: record.cable_id,
                    from,
                    existing,
                    new: to,
                });
            }
        }
        map
    }

    pub fn get(&self, from: &str) -> Option<&str> {
        self.pairs.get(from).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Keys that are not part of an involution `map[map[k]] == k` with
    /// `map[k] != k`.
    pub fn symmetry_faults(&self) -> Vec<SymmetryFault> {
        let mut faults = Vec::new();
        for (from, to) in &self.pairs {
            if from == to {
                faults.push(SymmetryFault::SelfLoop {
                    endpoint: from.clone(),
                });
                continue;
            }
            match self.pairs.get(to) {
                None => faults.push(SymmetryFault::MissingReverse {
                    from: from.clone(),
                    to: to.clone(),
                }),
                Some(reverse) if reverse != from => faults.push(SymmetryFault::Mismatch {
                    from: from.clone(),
                    to: to.clone(),
                    reverse: reverse.clone(),
                }),
                Some(_) => {}
            }
        }
        faults
    }
}

/// A rosette hostname listed on two cables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosetteCollision {
    pub host: String,
    pub first: CableId,
    pub second: CableId,
}

/// A connect row whose to-device is a rosette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosetteRow {
    pub cable_id: CableId,
    pub host: String,
}

/// Rosette to-hostname to cable ID.
#[derive(Debug, Clone, Default)]
pub struct RosetteIndex {
    hosts: BTreeMap<String, CableId>,
    pub collisions: Vec<RosetteCollision>,
    /// Every rosette row in record order.
    pub members: Vec<RosetteRow>,
}

impl RosetteIndex {
    pub fn build(records: &[CablePort], rosette_devices: &NameSet) -> Self {
        let mut index = Self::default();
        for record in records {
            if !record.is_connect() || !rosette_devices.contains(&record.to.device_name) {
                continue;
            }
            let host = record.to.host_name.clone();
            index.members.push(RosetteRow {
                cable_id: record.cable_id,
                host: host.clone(),
            });
            if let Insertion::AlreadyPresent(first) =
                insert_unique(&mut index.hosts, host.clone(), record.cable_id)
            {
                index.collisions.push(RosetteCollision {
                    host,
                    first,
                    second: record.cable_id,
                });
            }
        }
        index
    }

    pub fn cable_for(&self, host: &str) -> Option<CableId> {
        self.hosts.get(host).copied()
    }
}

/// Ports in use per from-host, over connect rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostPortUsage {
    hosts: BTreeMap<String, BTreeSet<String>>,
}

impl HostPortUsage {
    pub fn build(records: &[CablePort]) -> Self {
        let mut usage = Self::default();
        for record in records.iter().filter(|record| record.is_connect()) {
            usage
                .hosts
                .entry(record.from.host_name.clone())
                .or_default()
                .insert(record.from.port_name.clone());
        }
        usage
    }

    pub fn host_set(&self) -> BTreeSet<&str> {
        self.hosts.keys().map(String::as_str).collect()
    }

    pub fn ports(&self, host: &str) -> Option<&BTreeSet<String>> {
        self.hosts.get(host)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
