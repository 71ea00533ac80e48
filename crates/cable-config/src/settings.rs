#![deny(unsafe_code)]

//! Checker configuration.
//!
//! The configuration is a TOML document. Lists that exempt devices from a rule
//! and the legacy delimiter-encoded tables are kept as opaque strings here;
//! the validation crate owns their parsing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> Result<CheckConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::io(path, source))?;
    let config: CheckConfig = toml::from_str(&text).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub columns: ColumnLayout,
    pub words: ConnectWords,
    #[serde(default)]
    pub host_name: HostNameRules,
    #[serde(default)]
    pub ignore: IgnoreLists,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub device_host_names: DeviceHostConfig,
    #[serde(default)]
    pub rosette: RosetteConfig,
    #[serde(default)]
    pub router: RouterConfig,
    #[serde(default)]
    pub file_name: FileNameConfig,
    #[serde(default)]
    pub diagram: DiagramLayout,
}

impl CheckConfig {
    /// Parse and validate configuration text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: CheckConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.columns.validate()?;
        self.words.validate()?;
        self.diagram.validate()?;
        Ok(())
    }
}

/// 1-based column positions of each field in a cable sheet.
///
/// Optional columns that are absent read as empty fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub cable_id: usize,
    pub connect: usize,
    pub from_floor: Option<usize>,
    pub from_device_name: Option<usize>,
    pub from_device_number: Option<usize>,
    pub from_model_name: Option<usize>,
    pub from_host_name: Option<usize>,
    pub from_port_name: Option<usize>,
    pub from_connector_name: Option<usize>,
    pub from_key_port_name: Option<usize>,
    pub to_floor: Option<usize>,
    pub to_device_name: Option<usize>,
    pub to_device_number: Option<usize>,
    pub to_model_name: Option<usize>,
    pub to_host_name: Option<usize>,
    pub to_port_name: Option<usize>,
}

impl ColumnLayout {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.cable_id == 0 {
            return Err(ConfigError::InvalidColumn { column: "cable_id" });
        }
        if self.connect == 0 {
            return Err(ConfigError::InvalidColumn { column: "connect" });
        }
        let optional = [
            ("from_floor", self.from_floor),
            ("from_device_name", self.from_device_name),
            ("from_device_number", self.from_device_number),
            ("from_model_name", self.from_model_name),
            ("from_host_name", self.from_host_name),
            ("from_port_name", self.from_port_name),
            ("from_connector_name", self.from_connector_name),
            ("from_key_port_name", self.from_key_port_name),
            ("to_floor", self.to_floor),
            ("to_device_name", self.to_device_name),
            ("to_device_number", self.to_device_number),
            ("to_model_name", self.to_model_name),
            ("to_host_name", self.to_host_name),
            ("to_port_name", self.to_port_name),
        ];
        for (column, index) in optional {
            if index == Some(0) {
                return Err(ConfigError::InvalidColumn { column });
            }
        }
        Ok(())
    }
}

/// Literal tokens of the connect-state column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectWords {
    pub connect: String,
    pub disconnect: String,
}

impl ConnectWords {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.connect.is_empty() || self.disconnect.is_empty() {
            return Err(ConfigError::Invalid {
                message: "words.connect and words.disconnect must not be empty".to_string(),
            });
        }
        if self.connect == self.disconnect {
            return Err(ConfigError::Invalid {
                message: format!(
                    "words.connect and words.disconnect are both '{}'",
                    self.connect
                ),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostNameRules {
    /// Required length of a device hostname.
    pub device_length: usize,
    /// Second accepted length, to-side only.
    pub rosette_length: usize,
}

/// Comma-delimited exemption lists, one per rule family.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreLists {
    pub host_name_length: String,
    pub host_name_prefix: String,
    pub device_to_host_name: String,
    pub model_port: String,
    pub connect_x_connect: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPortEntry {
    pub model: String,
    #[serde(default)]
    pub ports: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub models: Vec<ModelPortEntry>,
    /// Legacy `model|port;port,model|port` encoding.
    pub model_and_port_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceHostEntry {
    pub device: String,
    pub host_substring: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceHostConfig {
    pub entries: Vec<DeviceHostEntry>,
    /// Legacy `device/substring,device/substring` encoding.
    pub word_device_to_host_name_list: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RosetteConfig {
    /// Comma list of device names classified as rosettes.
    pub device_names: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub model_name: String,
    pub port_name: String,
}

/// Tokens used to derive a site from the input file name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNameConfig {
    pub prefix: String,
    pub word: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramLayout {
    /// Leading rows (headings) to skip.
    pub header_rows: usize,
    pub host_column: usize,
    pub ports_column: usize,
    pub port_delimiter: String,
}

impl Default for DiagramLayout {
    fn default() -> Self {
        Self {
            header_rows: 0,
            host_column: 1,
            ports_column: 2,
            port_delimiter: ",".to_string(),
        }
    }
}

impl DiagramLayout {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.host_column == 0 {
            return Err(ConfigError::InvalidColumn {
                column: "diagram.host_column",
            });
        }
        if self.ports_column == 0 {
            return Err(ConfigError::InvalidColumn {
                column: "diagram.ports_column",
            });
        }
        if self.port_delimiter.is_empty() {
            return Err(ConfigError::Invalid {
                message: "diagram.port_delimiter must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
