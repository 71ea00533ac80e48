//! The cable connection record.
//!
//! One [`CablePort`] describes a single physical cable run between a from-side
//! port and a to-side port. Records are built once during ingestion and never
//! mutated afterwards; every validation rule reads the same ordered slice.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer identifier of one cable run. Expected to be unique per run.
pub type CableId = i64;

/// Controlled vocabulary of the from-side state column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectState {
    /// Active cabling.
    Connect,
    /// Informational or removed cabling.
    Disconnect,
}

impl ConnectState {
    /// Match a raw cell text against the configured connect/disconnect words.
    ///
    /// The comparison is exact: no trimming, no case folding.
    pub fn from_words(text: &str, connect: &str, disconnect: &str) -> Option<Self> {
        if text == connect {
            Some(Self::Connect)
        } else if text == disconnect {
            Some(Self::Disconnect)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Disconnect => "disconnect",
        }
    }
}

impl fmt::Display for ConnectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// From-side columns of a cable row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromSide {
    pub floor: String,
    pub device_name: String,
    pub device_number: String,
    pub model_name: String,
    pub host_name: String,
    pub port_name: String,
    pub connector_name: String,
    /// Independently filled copy of the port name, expected to agree with it.
    pub key_port_name: String,
}

/// To-side columns of a cable row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToSide {
    pub floor: String,
    pub device_name: String,
    pub device_number: String,
    pub model_name: String,
    pub host_name: String,
    pub port_name: String,
}

/// One cable endpoint pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CablePort {
    pub cable_id: CableId,
    pub connect_state: ConnectState,
    pub from: FromSide,
    pub to: ToSide,
}

impl CablePort {
    pub fn new(cable_id: CableId, connect_state: ConnectState) -> Self {
        Self {
            cable_id,
            connect_state,
            from: FromSide::default(),
            to: ToSide::default(),
        }
    }

    pub fn with_from(mut self, from: FromSide) -> Self {
        self.from = from;
        self
    }

    pub fn with_to(mut self, to: ToSide) -> Self {
        self.to = to;
        self
    }

    pub fn is_connect(&self) -> bool {
        self.connect_state == ConnectState::Connect
    }

    /// `host&port` key of the from-side.
    pub fn from_endpoint(&self) -> String {
        endpoint_key(&self.from.host_name, &self.from.port_name)
    }

    /// `host&port` key of the to-side.
    pub fn to_endpoint(&self) -> String {
        endpoint_key(&self.to.host_name, &self.to.port_name)
    }
}

/// Build the `host&port` key used by the duplicate and symmetry checks.
pub fn endpoint_key(host: &str, port: &str) -> String {
    format!("{host}&{port}")
}
