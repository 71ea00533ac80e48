//! On-disk sheet, workbook and diagram ingestion.

use std::fs;
use std::path::Path;

use cable_config::DiagramLayout;
use cable_ingest::{IngestError, list_csv_files, read_diagram, read_sheet, read_workbook};

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write file");
}

#[test]
fn reads_every_row_of_a_sheet() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cables.csv");
    write(&path, "ID,状態,ホスト\n1,接続,TK01\n\n2,切断,\n");
    let sheet = read_sheet(&path).expect("read");
    assert_eq!(sheet.name, "cables");
    assert_eq!(sheet.cell(0, 1).text(), "ID");
    assert_eq!(sheet.cell(1, 3).text(), "TK01");
    assert_eq!(sheet.cell(2, 2).text(), "切断");
    assert!(sheet.cell(2, 3).is_empty());
}

#[test]
fn directory_sheets_sorted_by_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(&dir.path().join("b.csv"), "2,接続\n");
    write(&dir.path().join("a.CSV"), "1,接続\n");
    write(&dir.path().join("notes.txt"), "ignored\n");
    let files = list_csv_files(dir.path()).expect("list");
    assert_eq!(files.len(), 2);
    let workbook = read_workbook(dir.path()).expect("workbook");
    let names: Vec<&str> = workbook.sheets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn single_file_is_one_sheet_workbook() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("配線表_TK01_01.csv");
    write(&path, "1,接続\n");
    let workbook = read_workbook(&path).expect("workbook");
    assert_eq!(workbook.name, "配線表_TK01_01.csv");
    assert_eq!(workbook.sheets.len(), 1);
}

#[test]
fn missing_input_and_empty_directory_are_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = read_workbook(&dir.path().join("nope.csv")).expect_err("missing");
    assert!(matches!(err, IngestError::InputNotFound { .. }));

    let err = read_workbook(dir.path()).expect_err("no sheets");
    assert!(matches!(err, IngestError::NoSheets { .. }));
}

#[test]
fn diagram_ports_are_split_and_trimmed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("diagram.csv");
    write(
        &path,
        "host,ports\nSW1,\"1, 2 ,\"\nSW2,\n,9\nSW1,3\n",
    );
    let layout = DiagramLayout {
        header_rows: 1,
        ..DiagramLayout::default()
    };
    let inventory = read_diagram(&path, &layout).expect("diagram");
    assert_eq!(inventory.host_set().into_iter().collect::<Vec<_>>(), vec!["SW1", "SW2"]);
    let ports: Vec<&str> = inventory
        .ports("SW1")
        .map(|set| set.iter().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(ports, vec!["1", "2", "3"]);
    assert!(inventory.ports("SW2").is_some_and(|set| set.is_empty()));
}
