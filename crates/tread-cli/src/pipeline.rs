//! Report pipeline with explicit stages.
//!
//! 1. **Ingest**: read the workbook directory and check the required sheets
//! 2. **Transform**: join, parse and enrich the tires table
//! 3. **Metrics**: wear metrics, filter, KPIs, costs and position risk
//! 4. **Output**: write the full and at-risk CSV views
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{info, info_span};

use tread_ingest::{ReadOptions, SourceTables, Workbook, load_tables};
use tread_metrics::{
    ConditionCount, CostEstimate, Kpis, PositionRisk, RowFilter, at_risk_view, compute_kpis,
    compute_metrics, condition_counts, estimate_costs, full_view, position_risk, write_csv,
};
use tread_model::PipelineConfig;
use tread_transform::{BaselineResolution, transform};

/// File name of the full dashboard export.
pub const FULL_VIEW_FILE: &str = "pneus_completo.csv";
/// File name of the critical and alert export.
pub const AT_RISK_VIEW_FILE: &str = "pneus_risco.csv";

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    pub workbook: Workbook,
    pub tables: SourceTables,
}

/// Read every sheet of a workbook directory and select the required ones.
pub fn ingest(dir: &Path, options: &ReadOptions) -> Result<IngestResult> {
    let span = info_span!("ingest", workbook = %dir.display());
    let _guard = span.enter();
    let start = Instant::now();
    let workbook = Workbook::from_dir(dir, options)
        .with_context(|| format!("read workbook {}", dir.display()))?;
    let tables = load_tables(&workbook).context("load workbook sheets")?;
    info!(
        sheets = workbook.len(),
        tires = tables.tires.height(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(IngestResult { workbook, tables })
}

// ============================================================================
// Stages 2-3: Transform and metrics
// ============================================================================

/// Everything computed from one workbook.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Rows in the enriched table before filtering.
    pub enriched_rows: usize,
    pub baseline: BaselineResolution,
    /// Metrics table after the row filter.
    pub metrics: DataFrame,
    pub kpis: Kpis,
    pub condition_counts: Vec<ConditionCount>,
    pub costs: CostEstimate,
    pub positions: Vec<PositionRisk>,
}

/// Enrich the source tables, compute metrics and summarize the filtered rows.
pub fn run_pipeline(
    tables: &SourceTables,
    config: &PipelineConfig,
    filter: &RowFilter,
) -> Result<PipelineOutput> {
    let transform_span = info_span!("transform");
    let transform_start = Instant::now();
    let enriched = transform_span
        .in_scope(|| transform(tables))
        .context("enrich tires table")?;
    info!(
        rows = enriched.record_count(),
        duration_ms = transform_start.elapsed().as_millis(),
        "transform complete"
    );

    let metrics_span = info_span!("metrics");
    let _guard = metrics_span.enter();
    let metrics_start = Instant::now();
    let metrics =
        compute_metrics(&enriched.data, &config.thresholds).context("compute wear metrics")?;
    let metrics = filter.apply(&metrics).context("apply row filter")?;
    let kpis = compute_kpis(&metrics);
    let output = PipelineOutput {
        enriched_rows: enriched.record_count(),
        baseline: enriched.baseline,
        condition_counts: condition_counts(&metrics),
        costs: estimate_costs(&metrics, &config.costs),
        positions: position_risk(&metrics, &config.colors),
        kpis,
        metrics,
    };
    info!(
        rows = output.metrics.height(),
        total = output.kpis.total,
        critical = output.kpis.critical,
        alert = output.kpis.alert,
        duration_ms = metrics_start.elapsed().as_millis(),
        "metrics complete"
    );
    Ok(output)
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Paths of the written exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    pub full: PathBuf,
    pub at_risk: PathBuf,
}

/// Write the full and at-risk views as CSV files into `output_dir`.
pub fn write_outputs(metrics: &DataFrame, output_dir: &Path) -> Result<OutputPaths> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let paths = OutputPaths {
        full: output_dir.join(FULL_VIEW_FILE),
        at_risk: output_dir.join(AT_RISK_VIEW_FILE),
    };
    let full = full_view(metrics).context("select dashboard columns")?;
    write_view(&full, &paths.full)?;
    let at_risk = at_risk_view(metrics).context("select at-risk rows")?;
    write_view(&at_risk, &paths.at_risk)?;
    info!(
        full_rows = full.height(),
        at_risk_rows = at_risk.height(),
        output_dir = %output_dir.display(),
        "outputs written"
    );
    Ok(paths)
}

fn write_view(view: &DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_csv(view, BufWriter::new(file)).with_context(|| format!("write {}", path.display()))
}

/// Machine-readable report, printed with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary<'a> {
    pub fingerprint: Option<&'a str>,
    pub enriched_rows: usize,
    pub filtered_rows: usize,
    pub filter: &'a RowFilter,
    pub baseline: &'a BaselineResolution,
    pub kpis: Kpis,
    pub condition_counts: &'a [ConditionCount],
    pub costs: CostEstimate,
    pub positions: &'a [PositionRisk],
    pub outputs: Option<&'a OutputPaths>,
}

impl<'a> ReportSummary<'a> {
    pub fn new(
        workbook: &'a Workbook,
        filter: &'a RowFilter,
        output: &'a PipelineOutput,
        outputs: Option<&'a OutputPaths>,
    ) -> Self {
        Self {
            fingerprint: workbook.fingerprint(),
            enriched_rows: output.enriched_rows,
            filtered_rows: output.metrics.height(),
            filter,
            baseline: &output.baseline,
            kpis: output.kpis,
            condition_counts: &output.condition_counts,
            costs: output.costs,
            positions: &output.positions,
            outputs,
        }
    }
}
