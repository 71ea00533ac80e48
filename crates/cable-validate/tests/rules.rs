//! Individual rule behaviour over small record sets.

mod common;

use cable_config::CheckConfig;
use cable_model::{CablePort, ConnectState, DiagramInventory, RuleOutcome, Severity};
use cable_validate::rules::{
    bijection, cable_id, connect, host_name, model_port, rosette,
};
use cable_validate::{Relations, RuleContext, Site, reconcile};

use common::{FILE_NAME, PREFIX, cable, clean_records, config, router, switch};

type Rule = fn(&RuleContext<'_>) -> RuleOutcome;

fn run_with(
    config: &CheckConfig,
    records: &[CablePort],
    diagram: Option<&DiagramInventory>,
    file_name: &str,
    rule: Rule,
) -> RuleOutcome {
    let relations = Relations::build(records, config);
    let site = Site::from_file_name(file_name, &config.file_name);
    let ctx = RuleContext {
        records,
        relations: &relations,
        config,
        prefix: PREFIX,
        site: &site,
        diagram,
    };
    rule(&ctx)
}

fn run(records: &[CablePort], rule: Rule) -> RuleOutcome {
    run_with(&config(), records, None, FILE_NAME, rule)
}

fn errors(outcome: &RuleOutcome) -> Vec<&str> {
    outcome
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .map(|d| d.message.as_str())
        .collect()
}

#[test]
fn clean_records_pass_every_rule() {
    let records = clean_records();
    let rules: [Rule; 13] = [
        cable_id::check,
        connect::check_requires_to,
        host_name::check_length,
        host_name::check_suffix,
        host_name::check_prefix,
        host_name::check_device_host_name,
        bijection::check,
        model_port::check_model_port,
        model_port::check_key_port,
        connect::check_connect_x_connect,
        reconcile::check,
        rosette::check_unique,
        rosette::check_site_number,
    ];
    for rule in rules {
        let outcome = run(&records, rule);
        assert!(outcome.passed, "{} failed: {:?}", outcome.rule, errors(&outcome));
    }
}

#[test]
fn duplicate_cable_id_cites_both_endpoints() {
    let records = vec![
        common::connect(101, switch("1"), router("Gi0/0/0")),
        common::connect(101, switch("2"), router("Gi0/0/1")),
    ];
    let outcome = run(&records, cable_id::check);
    assert!(!outcome.passed);
    let messages = errors(&outcome);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("TKSW01&1"));
    assert!(messages[0].contains("TKSW01&2"));
    assert_eq!(outcome.diagnostics[0].cable_id, Some(101));
}

#[test]
fn four_character_host_with_prefix_passes_length_and_prefix() {
    let mut config = config();
    config.host_name.device_length = 4;
    let records = vec![cable(
        1,
        ConnectState::Disconnect,
        ("SW", "01", "C9300", "TK01", "1"),
        ("", "", "", "", ""),
    )];
    let length = run_with(&config, &records, None, FILE_NAME, host_name::check_length);
    let prefix = run_with(&config, &records, None, FILE_NAME, host_name::check_prefix);
    assert!(length.passed, "{:?}", errors(&length));
    assert!(prefix.passed, "{:?}", errors(&prefix));
}

#[test]
fn rosette_length_accepted_on_to_side_only() {
    let records = vec![common::connect(
        1,
        ("SW", "01", "C9300", "TKRS0101", "1"),
        common::rosette("01", "TKRS0102"),
    )];
    let outcome = run(&records, host_name::check_length);
    let messages = errors(&outcome);
    assert_eq!(messages.len(), 1, "{messages:?}");
    assert!(messages[0].contains("from hostname 'TKRS0101'"));
}

#[test]
fn ignored_connector_exempts_from_side() {
    let mut record = common::connect(1, ("PATCH", "01", "C9300", "X", "1"), router("Gi0/0/0"));
    record.from.device_name = "SW".to_string();
    record.from.connector_name = "PATCH".to_string();
    let outcome = run(&[record], host_name::check_length);
    assert!(outcome.passed, "{:?}", errors(&outcome));
}

#[test]
fn disconnect_rows_skip_to_side_naming() {
    let records = vec![cable(
        1,
        ConnectState::Disconnect,
        switch("1"),
        ("RT", "01", "ASR1001", "bad", "Gi0/0/0"),
    )];
    for rule in [
        host_name::check_length as Rule,
        host_name::check_suffix,
        host_name::check_prefix,
        host_name::check_device_host_name,
    ] {
        let outcome = run(&records, rule);
        assert!(outcome.passed, "{} failed: {:?}", outcome.rule, errors(&outcome));
    }
}

#[test]
fn suffix_must_be_one_to_ninety_nine() {
    let records = vec![
        common::connect(1, ("SW", "01", "C9300", "TKSW00", "1"), router("Gi0/0/0")),
        common::connect(2, ("SW", "02", "C9300", "TKSWAB", "1"), router("Gi0/0/1")),
    ];
    let outcome = run(&records, host_name::check_suffix);
    let messages = errors(&outcome);
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("outside 1-99"));
    assert!(messages[1].contains("not a number"));
}

#[test]
fn prefix_is_case_sensitive() {
    let records = vec![common::connect(
        1,
        ("SW", "01", "C9300", "tkSW01", "1"),
        router("Gi0/0/0"),
    )];
    let outcome = run(&records, host_name::check_prefix);
    assert_eq!(errors(&outcome).len(), 1);
}

#[test]
fn device_without_definition_is_an_error() {
    let records = vec![
        common::connect(1, ("XX", "01", "C9300", "TKXX01", "1"), router("Gi0/0/0")),
        common::connect(2, ("SW", "02", "C9300", "TKRT02", "2"), router("Gi0/0/1")),
    ];
    let outcome = run(&records, host_name::check_device_host_name);
    let messages = errors(&outcome);
    assert_eq!(messages.len(), 2, "{messages:?}");
    assert!(messages[0].contains("device 'XX' has no hostname definition"));
    assert!(messages[1].contains("does not contain 'SW'"));
}

#[test]
fn ignored_from_device_or_connector_skips_containment() {
    let patch_device =
        common::connect(1, ("PATCH", "01", "C9300", "TKPP01", "1"), router("Gi0/0/0"));
    let mut patch_connector =
        common::connect(2, ("XX", "01", "C9300", "TKXX01", "2"), router("Gi0/0/1"));
    patch_connector.from.connector_name = "PATCH".to_string();
    let outcome = run(&[patch_device, patch_connector], host_name::check_device_host_name);
    assert!(outcome.passed, "{:?}", errors(&outcome));
}

#[test]
fn device_with_two_hostnames_breaks_bijection() {
    let records = vec![
        common::connect(1, switch("1"), router("Gi0/0/0")),
        common::connect(2, ("SW", "01", "C9300", "TKSW02", "2"), router("Gi0/0/1")),
    ];
    let outcome = run(&records, bijection::check);
    assert!(!outcome.passed);
    assert!(
        errors(&outcome)
            .iter()
            .any(|m| m.contains("device SW:01 has hostnames TKSW01 and TKSW02"))
    );
}

#[test]
fn hostname_shared_by_two_devices_breaks_bijection() {
    let records = vec![
        common::connect(1, switch("1"), router("Gi0/0/0")),
        common::connect(2, ("SW", "02", "C9300", "TKSW01", "2"), router("Gi0/0/1")),
    ];
    let outcome = run(&records, bijection::check);
    assert!(
        errors(&outcome)
            .iter()
            .any(|m| m.contains("hostname TKSW01 is used by devices SW:01 and SW:02"))
    );
}

#[test]
fn unknown_model_and_port_are_errors() {
    let records = vec![
        common::connect(1, ("SW", "01", "C2960", "TKSW01", "1"), router("Gi0/0/0")),
        common::connect(2, switch("9"), router("Gi0/0/0")),
    ];
    let outcome = run(&records, model_port::check_model_port);
    let messages = errors(&outcome);
    assert_eq!(messages.len(), 2, "{messages:?}");
    assert!(messages[0].contains("model 'C2960' is not in the catalog"));
    assert!(messages[1].contains("port '9' is not a port of model 'C9300'"));
}

#[test]
fn disconnect_row_with_to_model_is_checked_against_catalog() {
    let records = vec![
        cable(
            1,
            ConnectState::Disconnect,
            switch("1"),
            ("RT", "01", "BOGUS", "TKRT01", "zz"),
        ),
        cable(2, ConnectState::Disconnect, switch("2"), ("", "", "", "", "")),
    ];
    let outcome = run(&records, model_port::check_model_port);
    let messages = errors(&outcome);
    assert_eq!(messages.len(), 1, "{messages:?}");
    assert!(messages[0].contains("cable 1: to model 'BOGUS' is not in the catalog"));
}

#[test]
fn key_port_must_equal_port() {
    let mut record = common::connect(1, switch("1"), router("Gi0/0/0"));
    record.from.key_port_name = "01".to_string();
    let outcome = run(&[record], model_port::check_key_port);
    assert_eq!(errors(&outcome).len(), 1);
}

#[test]
fn connect_row_without_to_host_fails() {
    let records = vec![
        common::connect(1, switch("1"), ("", "", "", "", "")),
        cable(2, ConnectState::Disconnect, switch("2"), ("", "", "", "", "")),
    ];
    let outcome = run(&records, connect::check_requires_to);
    let messages = errors(&outcome);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("cable 1"));
}

#[test]
fn missing_reverse_names_the_pair() {
    let records = vec![common::connect(
        1,
        ("SW", "01", "C9300", "A", "1"),
        ("SW", "02", "C9300", "B", "2"),
    )];
    let outcome = run(&records, connect::check_connect_x_connect);
    assert!(!outcome.passed);
    assert!(errors(&outcome)[0].contains("To(B&2) not found"));
}

#[test]
fn self_loop_never_passes() {
    let records = vec![common::connect(1, switch("1"), switch("1"))];
    let outcome = run(&records, connect::check_connect_x_connect);
    assert!(!outcome.passed);
    assert!(errors(&outcome)[0].contains("connected to itself"));
}

#[test]
fn port_difference_is_reported() {
    let records = vec![
        common::connect(1, ("SW", "01", "C9300", "SW1", "1"), router("Gi0/0/0")),
        common::connect(2, ("SW", "01", "C9300", "SW1", "3"), router("Gi0/0/1")),
    ];
    let diagram = DiagramInventory::new().with_ports("SW1", ["1", "2"]);
    let outcome = run_with(&config(), &records, Some(&diagram), FILE_NAME, reconcile::check);
    assert!(!outcome.passed);
    let messages = errors(&outcome);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("{2, 3}"), "{}", messages[0]);
}

#[test]
fn host_difference_suppresses_port_comparison() {
    let records = clean_records();
    let diagram = DiagramInventory::new()
        .with_ports("TKSW01", ["9"])
        .with_ports("TKSW09", ["1"]);
    let outcome = run_with(&config(), &records, Some(&diagram), FILE_NAME, reconcile::check);
    let messages = errors(&outcome);
    assert_eq!(messages.len(), 1, "{messages:?}");
    assert!(messages[0].contains("host difference {TKRT01, TKSW09}"));
}

#[test]
fn missing_diagram_passes_with_note() {
    let outcome = run(&clean_records(), reconcile::check);
    assert!(outcome.passed);
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].severity, Severity::Info);
}

#[test]
fn rosette_collision_cites_both_cables() {
    let records = vec![
        common::connect(5, switch("1"), common::rosette("01", "TKRS0101")),
        common::connect(9, switch("2"), common::rosette("01", "TKRS0101")),
    ];
    let outcome = run(&records, rosette::check_unique);
    let messages = errors(&outcome);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("cables 5 and 9"));
}

#[test]
fn rosette_must_carry_site_number() {
    let records = clean_records();
    let outcome = run_with(&config(), &records, None, "配線表_TK01_02.csv", rosette::check_site_number);
    let messages = errors(&outcome);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("site number '02'"));

    let outcome = run_with(&config(), &records, None, "TK01.csv", rosette::check_site_number);
    let messages = errors(&outcome);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("no site number"));
}
