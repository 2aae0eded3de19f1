use anyhow::{Context, Result};
use tracing::info_span;

use tread_cli::config::{ConfigOverrides, resolve_config};
use tread_cli::pipeline::{ReportSummary, ingest, run_pipeline, write_outputs};
use tread_ingest::{ReadOptions, Workbook};
use tread_metrics::RowFilter;

use crate::cli::{FilterArgs, ReportArgs, SheetsArgs, WorkbookArgs};
use crate::summary::{print_report, print_sheets};

pub fn run_sheets(args: &SheetsArgs) -> Result<()> {
    let workbook = read_workbook(&args.workbook)?;
    print_sheets(&workbook);
    Ok(())
}

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let workbook_dir = &args.workbook.workbook_dir;
    let report_span = info_span!("report", workbook = %workbook_dir.display());
    let _report_guard = report_span.enter();

    let overrides = ConfigOverrides {
        critical_mm: args.critical_mm,
        alert_mm: args.alert_mm,
        unit_tire_cost: args.unit_cost,
        downtime_hour_cost: args.downtime_cost,
    };
    let config =
        resolve_config(args.config.as_deref(), &overrides).context("resolve configuration")?;
    let filter = row_filter(&args.filter);

    let options = ReadOptions::default().with_separator(args.workbook.separator);
    let ingested = ingest(workbook_dir, &options)?;
    let output = run_pipeline(&ingested.tables, &config, &filter)?;

    let outputs = if args.dry_run {
        None
    } else {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| workbook_dir.join("output"));
        Some(write_outputs(&output.metrics, &output_dir)?)
    };

    if args.json {
        let summary = ReportSummary::new(&ingested.workbook, &filter, &output, outputs.as_ref());
        let json = serde_json::to_string_pretty(&summary).context("serialize report")?;
        println!("{json}");
    } else {
        print_report(&ingested.workbook, &output, outputs.as_ref());
    }
    Ok(())
}

fn read_workbook(args: &WorkbookArgs) -> Result<Workbook> {
    let options = ReadOptions::default().with_separator(args.separator);
    Workbook::from_dir(&args.workbook_dir, &options)
        .with_context(|| format!("read workbook {}", args.workbook_dir.display()))
}

fn row_filter(args: &FilterArgs) -> RowFilter {
    RowFilter::default()
        .with_status(&args.status)
        .with_plate(&args.plate)
        .with_vehicle_type(&args.vehicle_type)
        .with_brand(&args.brand)
        .with_stage(&args.stage)
}
