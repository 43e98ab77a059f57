use std::io::Cursor;
use std::path::Path;

use ddv_ingest::{IngestError, parse_dictionary, read_dictionary};

const HEADER: &str =
    "Table Name,Column Name,English Name,Data Type,Precision,Scale,Description/Business Rules\n";

fn parse(body: &str) -> ddv_ingest::DictionaryTable {
    let input = format!("{HEADER}{body}");
    parse_dictionary(Cursor::new(input), Path::new("dictionary.csv")).expect("parse dictionary")
}

#[test]
fn rows_are_normalized_in_file_order() {
    let table = parse(
        " t_sls_ord_fact ,ord_dte, Order Date ,date,,,Date the order was placed\n\
         T_SLS_ORD_FACT,ORD_AMT,Order Amount,decimal(12,2),12,2,\n",
    );
    assert!(table.issues.is_empty());
    assert_eq!(table.rows.len(), 2);

    let first = &table.rows[0];
    assert_eq!(first.table_name, "T_SLS_ORD_FACT");
    assert_eq!(first.column_name, "ORD_DTE");
    assert_eq!(first.english_name, "Order Date");
    assert_eq!(first.data_type, "DATE");
    assert_eq!((first.precision, first.scale), (0, 0));
    assert_eq!(first.description, "Date the order was placed");

    let second = &table.rows[1];
    assert_eq!(second.column_name, "ORD_AMT");
    assert_eq!(second.data_type, "DECIMAL(12,2)");
    assert_eq!((second.precision, second.scale), (12, 2));
    assert!(second.description.is_empty());
}

#[test]
fn malformed_dimensions_are_coerced_and_reported() {
    let table = parse("T_SLS_ORD_FACT,ORD_AMT,Order Amount,DECIMAL,twelve,2.0,\n");
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].precision, 0);
    assert_eq!(table.rows[0].scale, 2);
    assert_eq!(table.issues.len(), 1);
    assert_eq!(table.issues[0].line, 1);
    assert!(table.issues[0].message.starts_with("precision:"));
}

#[test]
fn half_blank_rows_are_skipped_without_aborting() {
    let table = parse(
        ",,,,,,\n\
         T_SLS_ORD_FACT,,Order Date,DATE,,,\n\
         T_SLS_ORD_FACT,ORD_DTE,Order Date,DATE,,,\n",
    );
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.issues.len(), 1);
    assert_eq!(table.issues[0].line, 2);
    assert!(table.issues[0].message.contains("column name"));
}

#[test]
fn undecodable_cell_does_not_abort_the_load() {
    let mut input = HEADER.as_bytes().to_vec();
    input.extend_from_slice(b"T_SLS_ORD_FACT,ORD_DTE,Order Date,DATE,,,\n");
    input.extend_from_slice(b"T_SLS_ORD_FACT,ORD_AMT,Order \xffAmount,DECIMAL,12,2,\n");
    input.extend_from_slice(b"T_SLS_ORD_FACT,CUS_NAM,Customer Name,VARCHAR,,,\n");

    let table = parse_dictionary(Cursor::new(input), Path::new("dictionary.csv"))
        .expect("bad bytes are not fatal");

    let columns: Vec<&str> = table.rows.iter().map(|row| row.column_name.as_str()).collect();
    assert_eq!(columns, vec!["ORD_DTE", "ORD_AMT", "CUS_NAM"]);
    assert_eq!(table.rows[1].english_name, "Order \u{fffd}Amount");
    assert_eq!(table.rows[1].precision, 12);
    assert_eq!(table.issues.len(), 1);
    assert_eq!(table.issues[0].line, 2);
    assert!(table.issues[0].message.starts_with("invalid UTF-8"));
}

#[test]
fn optional_columns_may_be_absent() {
    let input = "table name,COLUMN NAME,English Name,Data Type\nT_X_DIM,CUS_NAM,Customer Name,VARCHAR\n";
    let table =
        parse_dictionary(Cursor::new(input), Path::new("dictionary.csv")).expect("parse");
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].precision, 0);
    assert!(table.rows[0].description.is_empty());
}

#[test]
fn missing_required_column_is_an_error() {
    let input = "Table Name,Column Name,Data Type\nT_X_DIM,CUS_NAM,VARCHAR\n";
    let error = parse_dictionary(Cursor::new(input), Path::new("dictionary.csv"))
        .expect_err("English Name missing");
    match error {
        IngestError::MissingColumn { column, .. } => assert_eq!(column, "English Name"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reads_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dictionary.csv");
    std::fs::write(&path, format!("{HEADER}T_SLS_ORD_FACT,ORD_DTE,Order Date,DATE,,,\n"))
        .expect("write dictionary");
    let table = read_dictionary(&path).expect("read dictionary");
    assert_eq!(table.rows.len(), 1);

    let missing = read_dictionary(&dir.path().join("missing.csv")).expect_err("missing file");
    assert!(matches!(missing, IngestError::Io { .. }));
}
