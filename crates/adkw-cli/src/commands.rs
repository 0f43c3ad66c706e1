use anyhow::Result;
use tracing::{info, info_span, trace};

use adkw_cli::logging::redact_value;
use adkw_cli::pipeline::{export, group_row_counts, load_report, select_groups};
use adkw_cli::render::{groups_table, print_empty_selection, print_report, thresholds_table};
use adkw_core::{AnalysisOptions, AnalysisOutcome, analyze, thresholds};
use adkw_model::{ColumnLayout, Locale};

use crate::cli::{AnalyzeArgs, GroupsArgs};

pub fn run_tags() -> Result<()> {
    println!("{}", thresholds_table(&thresholds()));
    Ok(())
}

pub fn run_groups(args: &GroupsArgs) -> Result<()> {
    let layout = ColumnLayout::SEARCH_TERM_REPORT;
    let report = load_report(&args.report, &layout)?;
    let groups = group_row_counts(&report, &layout);
    if groups.is_empty() {
        println!("No ad groups found in {}", args.report.display());
        return Ok(());
    }
    println!("{}", groups_table(&groups));
    Ok(())
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let locale = Locale::from(args.locale);
    let options = AnalysisOptions::default().with_locale(locale);
    let report = load_report(&args.report, &options.layout)?;
    let selection = select_groups(&report, &options.layout, &args.groups, args.all_groups);

    let span = info_span!("analyze", report = %args.report.display());
    let _guard = span.enter();
    let analysis = match analyze(&report.rows, &selection, &options) {
        AnalysisOutcome::EmptySelection => {
            print_empty_selection(locale);
            return Ok(());
        }
        AnalysisOutcome::Report(analysis) => analysis,
    };
    if analysis.matched_rows == 0 {
        info!("no rows matched the selected ad groups");
    }
    for keyword in &analysis.keywords.high {
        trace!(keyword = redact_value(keyword), "high performer");
    }
    for keyword in &analysis.keywords.low {
        trace!(keyword = redact_value(keyword), "low performer");
    }

    match args.format.export_format() {
        Some(format) => export(&analysis, format, args.output.as_deref()),
        None => {
            print_report(&analysis, locale);
            Ok(())
        }
    }
}
