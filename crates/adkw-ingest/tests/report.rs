use std::io::Write;

use adkw_ingest::{IngestError, read_report};
use adkw_model::{Cell, ColumnLayout, Field};
use tempfile::NamedTempFile;

const HEADER: &str = "Date,Portfolio,Currency,Campaign,Status,Ad Group,Targeting,Match Type,\
Customer Search Term,Impressions,Clicks,CTR,CPC,Spend,Sales,ACOS,ROAS,Orders,Units,CVR\n";

fn report_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(HEADER.as_bytes()).unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

#[test]
fn reads_positional_rows() {
    let file = report_file(&[
        "2024-05-01,,JPY,Shoes,On,Brand,shoes,EXACT,running shoes,1500,15,0.01,40.5,607.5,6075,0.1,0.1,3,3,0.1",
        "2024-05-01,,JPY,Shoes,On,Generic,shoe*,BROAD,sandals,800,1,0.00125,30,30,50,0.6,0.01,1,1,0.02",
    ]);
    let report = read_report(file.path()).expect("read report");
    let layout = ColumnLayout::SEARCH_TERM_REPORT;

    assert_eq!(report.width(), 20);
    assert!(report.validate_layout(&layout));
    assert_eq!(report.rows.len(), 2);

    let first = &report.rows[0];
    assert_eq!(
        first.field(Field::SearchTerm, &layout),
        Some(&Cell::Text("running shoes".to_string()))
    );
    assert_eq!(
        first.field(Field::Impressions, &layout).and_then(Cell::as_f64),
        Some(1500.0)
    );
    assert_eq!(
        first.field(Field::Ctr, &layout).and_then(Cell::as_f64),
        Some(0.01)
    );
    assert_eq!(report.group_labels(&layout), vec!["Brand", "Generic"]);
}

#[test]
fn empty_cells_are_null() {
    let file = report_file(&[
        "2024-05-01,,JPY,Shoes,On,Brand,shoes,EXACT,running shoes,1500,15,0.01,40.5,607.5,6075,0.1,0.1,3,3,",
        "2024-05-01,,JPY,Shoes,On,Brand,shoes,PHRASE,trail shoes,900,9,0.01,40.5,364.5,3645,0.1,0.1,2,2,0.2",
    ]);
    let report = read_report(file.path()).expect("read report");
    let layout = ColumnLayout::SEARCH_TERM_REPORT;
    assert_eq!(report.rows[0].field(Field::Cvr, &layout), Some(&Cell::Null));
    assert_eq!(
        report.rows[1].field(Field::Cvr, &layout).and_then(Cell::as_f64),
        Some(0.2)
    );
}

#[test]
fn header_only_report_is_empty() {
    let file = report_file(&[]);
    let result = read_report(file.path());
    assert!(matches!(result, Err(IngestError::EmptyReport { .. })));
}

#[test]
fn narrow_report_fails_layout_check() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"A,B,C\n1,2,3\n").unwrap();
    let report = read_report(file.path()).expect("read report");
    assert!(!report.validate_layout(&ColumnLayout::SEARCH_TERM_REPORT));
    assert_eq!(report.rows[0].get(9), None);
}
