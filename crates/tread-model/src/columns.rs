//! Column names used across the pipeline.
//!
//! Input names follow the fleet spreadsheet headers after aliasing; derived
//! names are the headers the dashboard displays and the CSV exports carry.

// === Tires sheet ===
pub const REFERENCE: &str = "Referência";
pub const PLATE: &str = "Veículo - Placa";
pub const VEHICLE_DESCRIPTION: &str = "Veículo - Descrição";
pub const BRAND: &str = "Marca (Atual)";
pub const STAGE: &str = "Vida";
pub const MODEL: &str = "Modelo (Atual)";
pub const STATUS: &str = "Status";
pub const INITIAL_ODOMETER: &str = "Hodômetro Inicial";
pub const CUMULATIVE_DISTANCE: &str = "Vida do Pneu - Km. Rodado";
pub const OBSERVATION: &str = "Observação";
pub const MEASURED_TREAD: &str = "Aferição - Sulco";

// === Position sheet ===
pub const POSITION_CODE: &str = "Sigla da Posição";
pub const POSITION_LABEL: &str = "Posição";
pub const POSITION_X: &str = "X";
pub const POSITION_Y: &str = "Y";

// === Baseline sheet ===
pub const BASELINE_TREAD: &str = "Sulco";

// === Derived by the transform pipeline ===
pub const OBSERVATION_DISTANCE: &str = "Observação - Km";
pub const DISTANCE_TRAVELED: &str = "Km Rodado até Aferição";
pub const INITIAL_TREAD: &str = "Sulco Inicial";
pub const VEHICLE_TYPE: &str = "Tipo Veículo";

// === Derived by the metrics engine ===
pub const CONSUMED_TREAD: &str = "Sulco Consumido";
pub const WEAR_RATE: &str = "Desgaste (mm/km)";
pub const PERCENT_REMAINING: &str = "% Sulco Restante";
pub const CONDITION: &str = "Condição";
pub const REMAINING_DISTANCE: &str = "Km Restante (estimado)";

/// Spelling variants accepted in any input sheet, mapped to their canonical name.
pub const COLUMN_ALIASES: &[(&str, &str)] = &[
    ("Modelo", MODEL),
    ("SULCO", BASELINE_TREAD),
    ("Sigla", POSITION_CODE),
    ("SIGLA", POSITION_CODE),
    ("POSIÇÃO", POSITION_LABEL),
];

/// Status values counted in the KPI summary.
pub const STATUS_STOCK: &str = "Estoque";
pub const STATUS_SCRAP: &str = "Sucata";
pub const STATUS_TRUCK: &str = "Caminhão";

/// Columns of the detailed dashboard table, in display order.
pub const DASHBOARD_COLUMNS: &[&str] = &[
    REFERENCE,
    PLATE,
    VEHICLE_DESCRIPTION,
    BRAND,
    MODEL,
    STAGE,
    INITIAL_TREAD,
    MEASURED_TREAD,
    PERCENT_REMAINING,
    CONDITION,
    CONSUMED_TREAD,
    DISTANCE_TRAVELED,
    WEAR_RATE,
    REMAINING_DISTANCE,
    POSITION_LABEL,
    POSITION_CODE,
    POSITION_X,
    POSITION_Y,
];
