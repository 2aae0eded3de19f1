//! Tires table enrichment.

use polars::prelude::DataFrame;
use tread_ingest::{SourceTables, column_text, has_column};
use tread_model::VehicleType;
use tread_model::columns::{
    BASELINE_TREAD, CUMULATIVE_DISTANCE, DISTANCE_TRAVELED, INITIAL_ODOMETER, INITIAL_TREAD,
    MEASURED_TREAD, OBSERVATION, OBSERVATION_DISTANCE, VEHICLE_DESCRIPTION, VEHICLE_TYPE,
};

use crate::aliases::apply_column_aliases;
use crate::baseline::{BaselineResolution, BaselineTable, frame_keys, resolve_baseline};
use crate::distance::resolve_distance_traveled;
use crate::error::Result;
use crate::frame::{parse_column_in_place, set_f64_column, set_str_column};
use crate::normalization::{classify_vehicle_type, extract_distance_from_text};
use crate::position::join_position;

/// The enriched tires table with a record of how baseline tread was resolved.
#[derive(Debug, Clone)]
pub struct EnrichedFrame {
    pub data: DataFrame,
    pub baseline: BaselineResolution,
}

impl EnrichedFrame {
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

/// Join, parse and enrich the tires table.
///
/// The input tables are not modified. The result keeps every tire row and
/// column, with numeric columns parsed and these columns added:
/// observation distance, distance traveled, position metadata, initial tread
/// and vehicle type.
pub fn transform(tables: &SourceTables) -> Result<EnrichedFrame> {
    let mut tires = tables.tires.clone();
    let mut position = tables.position.clone();
    let mut baseline_sheet = tables.baseline_tread.clone();
    for df in [&mut tires, &mut position, &mut baseline_sheet] {
        apply_column_aliases(df)?;
    }
    let height = tires.height();

    if parse_column_in_place(&mut tires, MEASURED_TREAD)?.is_none() {
        tracing::warn!(column = MEASURED_TREAD, "measured tread column missing");
    }
    if !has_column(&baseline_sheet, BASELINE_TREAD) {
        tracing::warn!(column = BASELINE_TREAD, "baseline tread column missing");
    }
    let baseline_table = BaselineTable::from_frame(&baseline_sheet);

    let initial_odometer = parse_column_in_place(&mut tires, INITIAL_ODOMETER)?;
    let cumulative = match parse_column_in_place(&mut tires, CUMULATIVE_DISTANCE)? {
        Some(values) => values,
        None => {
            let empty = vec![None; height];
            set_f64_column(&mut tires, CUMULATIVE_DISTANCE, empty.clone())?;
            empty
        }
    };

    let observation_km: Vec<Option<f64>> = match column_text(&tires, OBSERVATION) {
        Some(texts) => texts
            .iter()
            .map(|text| extract_distance_from_text(text.as_deref()))
            .collect(),
        None => vec![None; height],
    };
    set_f64_column(&mut tires, OBSERVATION_DISTANCE, observation_km.clone())?;

    let traveled =
        resolve_distance_traveled(&cumulative, &observation_km, initial_odometer.as_deref());
    set_f64_column(&mut tires, DISTANCE_TRAVELED, traveled)?;

    let mut tires = join_position(tires, &position)?;

    let keys = frame_keys(&tires);
    let (initial_tread, baseline) = resolve_baseline(&baseline_table, &keys);
    set_f64_column(&mut tires, INITIAL_TREAD, initial_tread)?;

    let vehicle_types: Vec<String> = match column_text(&tires, VEHICLE_DESCRIPTION) {
        Some(descriptions) => descriptions
            .iter()
            .map(|d| classify_vehicle_type(d.as_deref()).label().to_string())
            .collect(),
        None => vec![VehicleType::Other.label().to_string(); height],
    };
    set_str_column(&mut tires, VEHICLE_TYPE, vehicle_types)?;

    tracing::info!(
        rows = tires.height(),
        baseline_rows = baseline_table.len(),
        unresolved_baseline = baseline.unresolved,
        "tires enriched"
    );
    Ok(EnrichedFrame {
        data: tires,
        baseline,
    })
}
