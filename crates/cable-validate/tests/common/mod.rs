//! Shared fixtures for the validation tests.

#![allow(dead_code)]

use cable_config::CheckConfig;
use cable_model::{CableId, CablePort, ConnectState, FromSide, ToSide};

pub const FILE_NAME: &str = "配線表_TK01_01.csv";
pub const PREFIX: &str = "TK";

const CONFIG: &str = r#"
[columns]
cable_id = 1
connect = 2

[words]
connect = "接続"
disconnect = "切断"

[host_name]
device_length = 6
rosette_length = 8

[ignore]
host_name_length = "PATCH"
host_name_prefix = "PATCH"
device_to_host_name = "PATCH"
model_port = "WALL"
connect_x_connect = "RS"

[catalog]
model_and_port_name = "C9300|1;2;3;4"

[[catalog.models]]
model = "ASR1001"
ports = ["Gi0/0/0", "Gi0/0/1"]

[device_host_names]
word_device_to_host_name_list = "SW/SW,RT/RT,RS/RS"

[rosette]
device_names = "RS"

[router]
model_name = "ASR"
port_name = "Gi0/0/0"

[file_name]
prefix = "配線表_"
word = "_"
"#;

pub fn config() -> CheckConfig {
    CheckConfig::from_toml_str(CONFIG).expect("test config")
}

/// `(device, number, model, host, port)` of one side.
pub type Side<'a> = (&'a str, &'a str, &'a str, &'a str, &'a str);

pub fn cable(id: CableId, state: ConnectState, from: Side<'_>, to: Side<'_>) -> CablePort {
    CablePort::new(id, state)
        .with_from(FromSide {
            device_name: from.0.to_string(),
            device_number: from.1.to_string(),
            model_name: from.2.to_string(),
            host_name: from.3.to_string(),
            port_name: from.4.to_string(),
            connector_name: "LC".to_string(),
            key_port_name: from.4.to_string(),
            ..FromSide::default()
        })
        .with_to(ToSide {
            device_name: to.0.to_string(),
            device_number: to.1.to_string(),
            model_name: to.2.to_string(),
            host_name: to.3.to_string(),
            port_name: to.4.to_string(),
            ..ToSide::default()
        })
}

pub fn connect(id: CableId, from: Side<'_>, to: Side<'_>) -> CablePort {
    cable(id, ConnectState::Connect, from, to)
}

pub fn switch(port: &str) -> Side<'_> {
    ("SW", "01", "C9300", "TKSW01", port)
}

pub fn router(port: &str) -> Side<'_> {
    ("RT", "01", "ASR1001", "TKRT01", port)
}

pub fn rosette<'a>(number: &'a str, host: &'a str) -> Side<'a> {
    ("RS", number, "WALL", host, "1")
}

/// A switch-router link listed from both ends plus one rosette drop.
pub fn clean_records() -> Vec<CablePort> {
    vec![
        connect(1, switch("1"), router("Gi0/0/0")),
        connect(2, router("Gi0/0/0"), switch("1")),
        connect(3, switch("2"), rosette("01", "TKRS0101")),
    ]
}
