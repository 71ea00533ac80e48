//! Relation builder indexes.

mod common;

use std::collections::BTreeMap;

use cable_model::ConnectState;
use cable_validate::{
    ConnectMap, IgnoreSet, Insertion, NameSet, Relations, RosetteIndex, SymmetryFault,
    insert_unique,
};
use proptest::prelude::*;

use common::{cable, clean_records, config, router, switch};

#[test]
fn insert_unique_never_overwrites() {
    let mut map = BTreeMap::new();
    assert_eq!(insert_unique(&mut map, "a", 1), Insertion::Inserted);
    assert_eq!(insert_unique(&mut map, "a", 2), Insertion::AlreadyPresent(1));
    assert_eq!(map.get("a"), Some(&1));
}

#[test]
fn clean_records_build_exact_inverses() {
    let relations = Relations::build(&clean_records(), &config());
    let hosts = &relations.hosts;
    assert!(hosts.conflicts.is_empty());
    assert!(hosts.round_trip_faults().is_empty());
    assert_eq!(hosts.forward.len(), 3);
    for (device, host) in &hosts.forward {
        assert_eq!(hosts.inverse.get(host), Some(device));
    }
    assert_eq!(relations.cable_ids.len(), 3);
    assert_eq!(relations.cable_ids.endpoint(3), Some("TKSW01&2"));
    assert_eq!(relations.connects.len(), 2);
    assert_eq!(relations.connects.excluded, 1);
    assert_eq!(relations.rosettes.members.len(), 1);
    assert_eq!(relations.rosettes.cable_for("TKRS0101"), Some(3));
}

#[test]
fn disconnect_rows_stay_out_of_connect_map_and_usage() {
    let records = vec![
        common::connect(1, switch("1"), router("Gi0/0/0")),
        cable(2, ConnectState::Disconnect, switch("2"), router("Gi0/0/1")),
    ];
    let relations = Relations::build(&records, &config());
    assert_eq!(relations.connects.get("TKSW01&1"), Some("TKRT01&Gi0/0/0"));
    assert_eq!(relations.connects.get("TKSW01&2"), None);
    let ports: Vec<&str> = relations
        .usage
        .ports("TKSW01")
        .map(|ports| ports.iter().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(ports, vec!["1"]);
}

#[test]
fn second_claim_on_endpoint_is_a_collision() {
    let records = vec![
        common::connect(1, switch("1"), router("Gi0/0/0")),
        common::connect(2, switch("1"), router("Gi0/0/1")),
    ];
    let map = ConnectMap::build(&records, &IgnoreSet::parse(""));
    assert_eq!(map.get("TKSW01&1"), Some("TKRT01&Gi0/0/0"));
    assert_eq!(map.collisions.len(), 1);
    assert_eq!(map.collisions[0].cable_id, 2);
    assert_eq!(map.collisions[0].new, "TKRT01&Gi0/0/1");
}

#[test]
fn mismatched_reverse_is_reported() {
    let records = vec![
        common::connect(1, switch("1"), router("Gi0/0/0")),
        common::connect(2, router("Gi0/0/0"), switch("2")),
        common::connect(3, switch("2"), router("Gi0/0/0")),
    ];
    let map = ConnectMap::build(&records, &IgnoreSet::parse(""));
    let faults = map.symmetry_faults();
    assert_eq!(
        faults,
        vec![SymmetryFault::Mismatch {
            from: "TKSW01&1".to_string(),
            to: "TKRT01&Gi0/0/0".to_string(),
            reverse: "TKSW01&2".to_string(),
        }]
    );
}

#[test]
fn rosette_index_only_takes_rosette_devices() {
    let records = vec![
        common::connect(1, switch("1"), common::rosette("01", "TKRS0101")),
        common::connect(2, switch("2"), router("Gi0/0/0")),
        cable(3, ConnectState::Disconnect, switch("3"), common::rosette("02", "TKRS0102")),
    ];
    let index = RosetteIndex::build(&records, &NameSet::parse("RS"));
    assert_eq!(index.members.len(), 1);
    assert!(index.collisions.is_empty());
}

proptest! {
    #[test]
    fn both_way_listing_is_an_involution(
        ports in prop::collection::vec(("[0-9]{1,2}", "[0-9]{1,2}"), 1..16),
        dropped in any::<prop::sample::Index>(),
    ) {
        let mut records = Vec::new();
        for (i, (a, b)) in ports.iter().enumerate() {
            let from_host = format!("F{i}");
            let to_host = format!("T{i}");
            let from = ("SW", "01", "C9300", from_host.as_str(), a.as_str());
            let to = ("SW", "02", "C9300", to_host.as_str(), b.as_str());
            let id = i64::try_from(i).unwrap_or_default() * 2;
            records.push(common::connect(id, from, to));
            records.push(common::connect(id + 1, to, from));
        }
        let map = ConnectMap::build(&records, &IgnoreSet::parse(""));
        prop_assert!(map.symmetry_faults().is_empty());

        let k = dropped.index(ports.len());
        records.remove(k * 2 + 1);
        let map = ConnectMap::build(&records, &IgnoreSet::parse(""));
        let (a, b) = &ports[k];
        prop_assert_eq!(
            map.symmetry_faults(),
            vec![SymmetryFault::MissingReverse {
                from: format!("F{k}&{a}"),
                to: format!("T{k}&{b}"),
            }]
        );
    }

    #[test]
    fn every_listed_name_is_a_member(names in prop::collection::vec("[A-Z]{0,4}", 1..8)) {
        let set = IgnoreSet::parse(&names.join(","));
        for name in &names {
            prop_assert!(set.contains(name));
        }
        prop_assert!(!set.contains("a"));
    }
}
