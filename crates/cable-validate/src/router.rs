//! Router usage classification per site.

use cable_config::RouterConfig;
use cable_model::{CablePort, RouterUsage};

/// Usage class of one record, or `None` when its from-port is not a router
/// uplink port.
pub fn classify_record(record: &CablePort, config: &RouterConfig) -> Option<RouterUsage> {
    if !record.from.port_name.contains(config.port_name.as_str()) {
        return None;
    }
    let usage = if !record.from.model_name.contains(config.model_name.as_str()) {
        RouterUsage::NotModel
    } else if record.to.host_name.is_empty() {
        RouterUsage::CheckMe
    } else if record.is_connect() {
        RouterUsage::Used
    } else {
        RouterUsage::Corrected
    };
    Some(usage)
}

/// Lowest usage over the matching records of one site; `Unknown` when none
/// match.
pub fn classify_site(records: &[CablePort], config: &RouterConfig) -> RouterUsage {
    RouterUsage::reduce(
        records
            .iter()
            .filter_map(|record| classify_record(record, config)),
    )
}

#[cfg(test)]
mod tests {
    use cable_model::{ConnectState, FromSide, ToSide};

    use super::*;

    fn config() -> RouterConfig {
        RouterConfig {
            model_name: "ASR".to_string(),
            port_name: "Gi0/0/0".to_string(),
        }
    }

    fn row(state: ConnectState, model: &str, port: &str, to_host: &str) -> CablePort {
        CablePort::new(1, state)
            .with_from(FromSide {
                model_name: model.to_string(),
                port_name: port.to_string(),
                ..FromSide::default()
            })
            .with_to(ToSide {
                host_name: to_host.to_string(),
                ..ToSide::default()
            })
    }

    #[test]
    fn classifies_each_case() {
        let config = config();
        let cases = [
            (row(ConnectState::Connect, "ASR1001", "Gi0/0/0", "TKSW01"), Some(RouterUsage::Used)),
            (row(ConnectState::Disconnect, "ASR1001", "Gi0/0/0", "TKSW01"), Some(RouterUsage::Corrected)),
            (row(ConnectState::Connect, "ASR1001", "Gi0/0/0", ""), Some(RouterUsage::CheckMe)),
            (row(ConnectState::Connect, "ISR4321", "Gi0/0/0", "TKSW01"), Some(RouterUsage::NotModel)),
            (row(ConnectState::Connect, "ASR1001", "Gi0/0/1", "TKSW01"), None),
        ];
        for (record, expected) in cases {
            assert_eq!(classify_record(&record, &config), expected);
        }
    }

    #[test]
    fn site_takes_minimum_or_unknown() {
        let config = config();
        let records = vec![
            row(ConnectState::Connect, "ASR1001", "Gi0/0/0", ""),
            row(ConnectState::Disconnect, "ASR1001", "Gi0/0/0", "TKSW01"),
        ];
        assert_eq!(classify_site(&records, &config), RouterUsage::Corrected);
        assert_eq!(classify_site(&[], &config), RouterUsage::Unknown);
    }
}
