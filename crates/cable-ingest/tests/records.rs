//! Record acceptance tests.

use cable_config::CheckConfig;
use cable_ingest::{
    Cell, Sheet, SkipReason, Workbook, accept_row, accept_workbook, parse_cable_id,
};
use cable_model::ConnectState;

const CONFIG: &str = r#"
[columns]
cable_id = 1
connect = 2
from_device_name = 3
from_device_number = 4
from_host_name = 5
from_port_name = 6
from_connector_name = 7
from_key_port_name = 8
to_device_name = 9
to_host_name = 10
to_port_name = 11

[words]
connect = "接続"
disconnect = "切断"
"#;

fn config() -> CheckConfig {
    CheckConfig::from_toml_str(CONFIG).expect("config")
}

fn row(cells: &[&str]) -> Vec<Cell> {
    cells.iter().map(|raw| Cell::from_raw(raw)).collect()
}

#[test]
fn numeric_and_text_ids_are_accepted() {
    assert_eq!(parse_cable_id(&Cell::from_raw("101")), Ok(101));
    assert_eq!(parse_cable_id(&Cell::from_raw("101.0")), Ok(101));
    assert_eq!(parse_cable_id(&Cell::Text(" 42 ".to_string())), Ok(42));
    assert_eq!(
        parse_cable_id(&Cell::from_raw("10.5")),
        Err(SkipReason::NotInteger(10.5))
    );
    assert_eq!(
        parse_cable_id(&Cell::from_raw("A-1")),
        Err(SkipReason::NotNumericText("A-1".to_string()))
    );
    assert_eq!(parse_cable_id(&Cell::Empty), Err(SkipReason::Missing));
}

#[test]
fn ids_beyond_i64_range_are_skipped() {
    let two_pow_63 = 9_223_372_036_854_775_808.0_f64;
    assert_eq!(
        parse_cable_id(&Cell::from_raw("9223372036854775808")),
        Err(SkipReason::NotInteger(two_pow_63))
    );
    assert_eq!(
        parse_cable_id(&Cell::from_raw("-9223372036854775808")),
        Ok(i64::MIN)
    );
}

#[test]
fn connect_row_is_copied_verbatim() {
    let config = config();
    let cells = row(&[
        "7", "接続", "SW", "01", "TKSW01", "1", "LC", "1", "RT", "TKRT01", "Gi0",
    ]);
    let record = accept_row(&cells, &config)
        .expect("accepted")
        .expect("cable row");
    assert_eq!(record.cable_id, 7);
    assert_eq!(record.connect_state, ConnectState::Connect);
    assert_eq!(record.from.device_number, "01");
    assert_eq!(record.from.host_name, "TKSW01");
    assert_eq!(record.from.connector_name, "LC");
    assert_eq!(record.to.host_name, "TKRT01");
    assert_eq!(record.to.port_name, "Gi0");
    assert_eq!(record.to.model_name, "", "unconfigured column reads empty");
}

#[test]
fn rows_without_connect_word_are_not_cable_rows() {
    let config = config();
    assert_eq!(accept_row(&row(&["1", ""]), &config), Ok(None));
    assert_eq!(accept_row(&row(&["ID", "状態"]), &config), Ok(None));
    assert_eq!(accept_row(&row(&["1", "接続 "]), &config), Ok(None));
    assert_eq!(accept_row(&row(&[]), &config), Ok(None));
}

#[test]
fn disconnect_rows_are_accepted() {
    let config = config();
    let record = accept_row(&row(&["3", "切断"]), &config)
        .expect("accepted")
        .expect("cable row");
    assert_eq!(record.connect_state, ConnectState::Disconnect);
    assert_eq!(record.from.host_name, "");
}

#[test]
fn bad_ids_are_skipped_not_fatal() {
    let config = config();
    let sheet = Sheet::from_rows(
        "cables",
        vec![
            vec!["ID", "状態"],
            vec!["1", "接続"],
            vec!["x", "接続"],
            vec!["", "切断"],
            vec!["2", "切断"],
        ],
    );
    let workbook = Workbook {
        name: "cables.csv".to_string(),
        sheets: vec![sheet],
    };
    let outcome = accept_workbook(&workbook, &config);
    let ids: Vec<i64> = outcome.records.iter().map(|r| r.cable_id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(outcome.skipped.len(), 2);
    assert_eq!(outcome.skipped[0].row, 3);
    assert_eq!(outcome.skipped[0].sheet, "cables");
    assert_eq!(outcome.skipped[1].reason, SkipReason::Missing);
}

#[test]
fn sheets_are_read_in_order() {
    let config = config();
    let workbook = Workbook {
        name: "book".to_string(),
        sheets: vec![
            Sheet::from_rows("b", vec![vec!["5", "接続"]]),
            Sheet::from_rows("a", vec![vec!["3", "接続"]]),
        ],
    };
    let outcome = accept_workbook(&workbook, &config);
    let ids: Vec<i64> = outcome.records.iter().map(|r| r.cable_id).collect();
    assert_eq!(ids, vec![5, 3]);
}
