//! Integration tests for the report pipeline.

use std::fs;
use std::path::Path;

use tread_cli::config::{ConfigOverrides, resolve_config};
use tread_cli::pipeline::{
    AT_RISK_VIEW_FILE, FULL_VIEW_FILE, ReportSummary, ingest, run_pipeline, write_outputs,
};
use tread_ingest::ReadOptions;
use tread_metrics::RowFilter;
use tread_model::{ConfigError, PipelineConfig};

fn write_workbook(dir: &Path) {
    fs::write(
        dir.join("pneus.csv"),
        "Referência,Veículo - Placa,Veículo - Descrição,Status,Vida,Modelo,Sigla,\
         Vida do Pneu - Km. Rodado,Aferição - Sulco\n\
         P-1,ABC1D23,Iveco Daily,Caminhão,NOVO,ABC,DE1,5000,\"1,5\"\n\
         P-2,ABC1D23,Iveco Daily,Caminhão,NOVO,ABC,TE1,4000,\"3,0\"\n\
         P-3,,,Estoque,RECAPADO 1,ABC,DE1,,9\n",
    )
    .unwrap();
    fs::write(
        dir.join("posição.csv"),
        "Sigla,Posição,X,Y\nDE1,Dianteiro Esquerdo,0,0\nTE1,Traseiro Esquerdo,0,3\n",
    )
    .unwrap();
    fs::write(
        dir.join("sulco.csv"),
        "Vida,Modelo,SULCO\nNOVO,ABC,10\nRECAPADO 1,ABC,\"12,0\"\n",
    )
    .unwrap();
}

#[test]
fn test_report_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write_workbook(dir.path());

    let ingested = ingest(dir.path(), &ReadOptions::default()).unwrap();
    let filter = RowFilter::default();
    let output = run_pipeline(&ingested.tables, &PipelineConfig::default(), &filter).unwrap();

    assert_eq!(output.enriched_rows, 3);
    assert_eq!(output.kpis.total, 3);
    assert_eq!(output.kpis.critical, 1);
    assert_eq!(output.kpis.alert, 1);
    assert_eq!(output.kpis.truck, 2);
    assert_eq!(output.costs.replacement_cost, 1200.0);
    assert_eq!(output.positions[0].code, "DE1");
    insta::assert_json_snapshot!(output.condition_counts, @r#"
    [
      {
        "condition": "Crítico",
        "count": 1
      },
      {
        "condition": "Alerta",
        "count": 1
      },
      {
        "condition": "Ok",
        "count": 1
      }
    ]
    "#);

    let output_dir = dir.path().join("output");
    let paths = write_outputs(&output.metrics, &output_dir).unwrap();
    assert_eq!(paths.full, output_dir.join(FULL_VIEW_FILE));
    assert_eq!(paths.at_risk, output_dir.join(AT_RISK_VIEW_FILE));

    let full = fs::read_to_string(&paths.full).unwrap();
    assert!(full.starts_with("Referência,Veículo - Placa"));
    assert_eq!(full.lines().count(), 4);
    let at_risk = fs::read_to_string(&paths.at_risk).unwrap();
    assert_eq!(at_risk.lines().count(), 3);

    let summary = ReportSummary::new(&ingested.workbook, &filter, &output, Some(&paths));
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["kpis"]["total"], 3);
    assert_eq!(json["filtered_rows"], 3);
    assert_eq!(
        json["fingerprint"].as_str().map(str::len),
        Some(64),
        "fingerprint is a hex SHA-256"
    );
}

#[test]
fn test_report_with_filter_and_separator() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("pneus.csv"),
        "Referência;Status;Vida;Modelo;Aferição - Sulco\n\
         P-1;Caminhão;NOVO;ABC;1,5\n\
         P-2;Estoque;NOVO;ABC;8\n",
    )
    .unwrap();
    fs::write(dir.path().join("posição.csv"), "Sigla;Posição\n").unwrap();
    fs::write(dir.path().join("sulco.csv"), "Vida;Modelo;Sulco\nNOVO;ABC;10\n").unwrap();

    let options = ReadOptions::default().with_separator(b';');
    let ingested = ingest(dir.path(), &options).unwrap();
    let filter = RowFilter::default().with_status(["Estoque"]);
    let output = run_pipeline(&ingested.tables, &PipelineConfig::default(), &filter).unwrap();

    assert_eq!(output.enriched_rows, 2);
    assert_eq!(output.metrics.height(), 1);
    assert_eq!(output.kpis.total, 1);
    assert_eq!(output.kpis.ok, 1);
    assert_eq!(output.costs.critical_count, 0);
}

#[test]
fn test_missing_sheet_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pneus.csv"), "Referência\nP-1\n").unwrap();
    fs::write(dir.path().join("sulco.csv"), "Vida,Sulco\nNOVO,16\n").unwrap();

    let error = ingest(dir.path(), &ReadOptions::default()).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("posição"), "{message}");
}

#[test]
fn test_config_layers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tread.toml");
    fs::write(
        &path,
        "[thresholds]\ncritical_mm = 1.6\nalert_mm = 3.0\n\n[costs]\nunit_tire_cost = 900.0\n",
    )
    .unwrap();

    let from_file = resolve_config(Some(path.as_path()), &ConfigOverrides::default()).unwrap();
    assert_eq!(from_file.thresholds.critical_mm, 1.6);
    assert_eq!(from_file.costs.unit_tire_cost, 900.0);
    assert_eq!(from_file.costs.downtime_hour_cost, 300.0);

    let overrides = ConfigOverrides {
        alert_mm: Some(5.0),
        downtime_hour_cost: Some(0.0),
        ..ConfigOverrides::default()
    };
    let layered = resolve_config(Some(path.as_path()), &overrides).unwrap();
    assert_eq!(layered.thresholds.critical_mm, 1.6);
    assert_eq!(layered.thresholds.alert_mm, 5.0);
    assert_eq!(layered.costs.downtime_hour_cost, 0.0);

    let invalid = ConfigOverrides {
        critical_mm: Some(6.0),
        ..ConfigOverrides::default()
    };
    assert!(matches!(
        resolve_config(Some(path.as_path()), &invalid),
        Err(ConfigError::InvalidThresholds { .. })
    ));
    assert!(matches!(
        resolve_config(Some(dir.path().join("missing.toml").as_path()), &ConfigOverrides::default()),
        Err(ConfigError::Read { .. })
    ));
}
