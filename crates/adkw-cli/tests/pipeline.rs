//! Load, select and export stages over a real report file.

use std::fs;
use std::io::Write;

use adkw_cli::pipeline::{ExportFormat, export, group_row_counts, load_report, select_groups};
use adkw_core::{AnalysisOptions, AnalysisOutcome, AnalysisReport, analyze};
use adkw_ingest::ReportTable;
use adkw_model::ColumnLayout;
use tempfile::{NamedTempFile, TempDir};

const REPORT: &str = "\
Date,Portfolio,Currency,Campaign,Status,Ad Group,Targeting,Match Type,\
Customer Search Term,Impressions,Clicks,CTR,CPC,Spend,Sales,ACOS,ROAS,Orders,Units,CVR
2024-05-01,,JPY,Shoes,On,Brand,shoes,EXACT,running shoes,1500,15,0.01,40.5,607.5,6075,0.1,0.1,3,3,0.1
2024-05-01,,JPY,Shoes,On,Generic,shoe*,BROAD,sandals,800,1,0.002,30,30,50,0.5,0.01,1,1,0.02
2024-05-01,,JPY,Shoes,On,Brand,shoes,PHRASE,trail shoes,2400,60,0.025,25,1500,3000,0.5,2,4,4,0.0667
";

fn load() -> ReportTable {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(REPORT.as_bytes()).unwrap();
    load_report(file.path(), &ColumnLayout::SEARCH_TERM_REPORT).expect("load report")
}

fn report_for(selection_groups: &[String], all_groups: bool) -> AnalysisOutcome {
    let report = load();
    let layout = ColumnLayout::SEARCH_TERM_REPORT;
    let selection = select_groups(&report, &layout, selection_groups, all_groups);
    analyze(&report.rows, &selection, &AnalysisOptions::default())
}

fn expect_report(outcome: AnalysisOutcome) -> AnalysisReport {
    match outcome {
        AnalysisOutcome::Report(report) => report,
        AnalysisOutcome::EmptySelection => panic!("expected a report"),
    }
}

#[test]
fn group_counts_follow_report_order() {
    let report = load();
    let counts = group_row_counts(&report, &ColumnLayout::SEARCH_TERM_REPORT);
    assert_eq!(
        counts,
        vec![("Brand".to_string(), 2), ("Generic".to_string(), 1)]
    );
}

#[test]
fn all_groups_selects_every_label() {
    let report = expect_report(report_for(&[], true));
    assert_eq!(report.selection, vec!["Brand", "Generic"]);
    assert_eq!(report.matched_rows, 3);
    assert_eq!(report.keywords.high, vec!["running shoes"]);
    assert_eq!(report.keywords.low, vec!["sandals"]);
}

#[test]
fn named_groups_filter_rows() {
    let report = expect_report(report_for(&["Generic".to_string()], false));
    assert_eq!(report.matched_rows, 1);
    assert!(report.keywords.high.is_empty());
}

#[test]
fn no_groups_is_an_empty_selection() {
    assert_eq!(report_for(&[], false), AnalysisOutcome::EmptySelection);
}

#[test]
fn missing_report_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");
    let error = load_report(&path, &ColumnLayout::SEARCH_TERM_REPORT).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("load report"));
    assert!(message.contains("absent.csv"));
}

#[test]
fn export_writes_csv_file() {
    let report = expect_report(report_for(&[], true));
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("evaluation.csv");
    export(&report, ExportFormat::Csv, Some(&path)).expect("export csv");

    let written = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Keyword,Targeting,MatchType,Impressions"));
    assert!(lines[1].starts_with("trail shoes,shoes,phrase,2400"));
}

#[test]
fn export_writes_json_file() {
    let report = expect_report(report_for(&["Brand".to_string()], false));
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("evaluation.json");
    export(&report, ExportFormat::Json, Some(&path)).expect("export json");

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.ends_with('\n'));
    assert!(written.contains("\"matched_rows\": 2"));
    assert!(written.contains("\"running shoes\""));
}
