// tests/files.rs
//
// File type checks, CSV persistence and spreadsheet header detection.
//
use std::fs;

use psi_scrape::Error;
use psi_scrape::config::FileType;
use psi_scrape::file::{check_filetype, load_dataset, require_columns, save_dataset};
use psi_scrape::store::{DataSet, Value};
use psi_scrape::xlsx::{detect_header, from_rows};

#[test]
fn extension_must_match() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pharmacies.txt");
    fs::write(&path, "x").unwrap();

    let err = check_filetype(&path, FileType::Csv, true).unwrap_err();
    assert!(matches!(err, Error::WrongFileType { expected: FileType::Csv, .. }));
    assert!(err.to_string().ends_with("is not csv file."));
}

#[test]
fn extension_check_ignores_case() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("LIST.XLSX");
    fs::write(&path, "x").unwrap();
    assert!(check_filetype(&path, FileType::Xlsx, true).is_ok());
}

#[test]
fn existence_is_only_checked_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("later.csv");

    assert!(check_filetype(&path, FileType::Csv, false).is_ok());
    assert!(matches!(
        check_filetype(&path, FileType::Csv, true),
        Err(Error::FileNotFound(_))
    ));
}

#[test]
fn bare_extension_name_is_not_enough() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("csv");
    assert!(check_filetype(&path, FileType::Csv, false).is_err());
}

#[test]
fn saved_csv_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/out/output.csv");
    let ds = DataSet::from_rows(
        &["Registration Number", "Trading Name", "Website"],
        vec![
            vec![Value::Int(1001), "Pharma, A".into(), Value::Null],
            vec![Value::Int(1002), "Pharma B".into(), "https://b.ie".into()],
        ],
    );

    save_dataset(&ds, &path).unwrap();
    let back = load_dataset(&path, FileType::Csv).unwrap();
    assert_eq!(back, ds);
    assert!(require_columns(&back).is_ok());
}

#[test]
fn missing_required_column_is_named() {
    let ds = DataSet::from_rows(&["Trading Name", "County"], vec![]);
    match require_columns(&ds) {
        Err(Error::MissingColumn(c)) => assert_eq!(c, "Registration Number"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn header_under_title_block() {
    let rows: Vec<Vec<Value>> = vec![
        vec!["Pharmacy list, October".into(), Value::Null],
        vec!["Registration Number".into(), "Trading Name".into()],
        vec![Value::Int(1001), "Pharma A".into()],
        vec![Value::Int(1002), "Pharma B".into()],
    ];
    assert_eq!(detect_header(&rows, 3).unwrap(), 1);

    let ds = from_rows(rows, 3).unwrap();
    assert_eq!(ds.headers, ["Registration Number", "Trading Name"]);
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.value(1, "Trading Name"), Some(&Value::from("Pharma B")));
}

#[test]
fn header_on_first_row() {
    let rows: Vec<Vec<Value>> = vec![
        vec!["Registration Number".into(), "Trading Name".into(), Value::Null],
        vec!["1001".into(), "Pharma A".into(), "x".into()],
    ];
    let ds = from_rows(rows, 3).unwrap();
    assert_eq!(ds.headers, ["Registration Number", "Trading Name", "Unnamed: 2"]);
    assert_eq!(ds.len(), 1);
}

#[test]
fn no_numeric_row_takes_last_scanned() {
    let rows: Vec<Vec<Value>> = vec![
        vec!["Title".into()],
        vec!["Subtitle".into()],
        vec!["Registration Number".into()],
        vec!["PSI-1".into()],
    ];
    assert_eq!(detect_header(&rows, 3).unwrap(), 2);
}

#[test]
fn unusable_sheets_are_rejected() {
    let one: Vec<Vec<Value>> = vec![vec!["Registration Number".into()]];
    assert!(matches!(detect_header(&one, 3), Err(Error::TooFewRows)));

    let data_first: Vec<Vec<Value>> = vec![vec![Value::Int(1)], vec![Value::Int(2)]];
    assert!(matches!(detect_header(&data_first, 3), Err(Error::HeaderNotFound)));
}
