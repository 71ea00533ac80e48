#![deny(unsafe_code)]

pub mod error;
pub mod settings;

pub use error::ConfigError;
pub use settings::{
    CatalogConfig, CheckConfig, ColumnLayout, ConnectWords, DeviceHostConfig, DeviceHostEntry,
    DiagramLayout, FileNameConfig, HostNameRules, IgnoreLists, ModelPortEntry, RosetteConfig,
    RouterConfig, load_config,
};
