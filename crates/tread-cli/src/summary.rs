use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tread_cli::pipeline::{OutputPaths, PipelineOutput};
use tread_ingest::{Workbook, format_numeric};
use tread_metrics::PositionRisk;
use tread_model::{Condition, REQUIRED_SHEETS};
use tread_transform::BaselineTier;

pub fn print_report(workbook: &Workbook, output: &PipelineOutput, outputs: Option<&OutputPaths>) {
    if let Some(fingerprint) = workbook.fingerprint() {
        println!("Workbook: {fingerprint}");
    }
    println!(
        "Tires: {} enriched, {} after filters",
        output.enriched_rows,
        output.metrics.height()
    );
    if let Some(paths) = outputs {
        println!("Full export: {}", paths.full.display());
        println!("At-risk export: {}", paths.at_risk.display());
    }
    print_kpi_table(output);
    print_condition_table(output);
    print_cost_table(output);
    print_baseline_table(output);
    print_position_table(&output.positions);
}

fn print_kpi_table(output: &PipelineOutput) {
    let kpis = &output.kpis;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total"),
        header_cell("Critical"),
        header_cell("Alert"),
        header_cell("Ok"),
        header_cell("Stock"),
        header_cell("Scrap"),
        header_cell("On truck"),
        header_cell("% Critical"),
        header_cell("% Alert"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..9 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(kpis.total).add_attribute(Attribute::Bold),
        count_cell(kpis.critical, Color::Red),
        count_cell(kpis.alert, Color::Yellow),
        count_cell(kpis.ok, Color::Green),
        dim_or_plain(kpis.stock),
        dim_or_plain(kpis.scrap),
        dim_or_plain(kpis.truck),
        Cell::new(format!("{:.1}", kpis.percent_critical)),
        Cell::new(format!("{:.1}", kpis.percent_alert)),
    ]);
    println!("{table}");
}

fn print_condition_table(output: &PipelineOutput) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Condition"), header_cell("Tires")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &output.condition_counts {
        table.add_row(vec![
            condition_cell(Some(entry.condition)),
            Cell::new(entry.count),
        ]);
    }
    println!();
    println!("Conditions:");
    println!("{table}");
}

fn print_cost_table(output: &PipelineOutput) {
    let costs = &output.costs;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Critical tires"),
        header_cell("Replacement"),
        header_cell("Downtime"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        count_cell(costs.critical_count, Color::Red),
        Cell::new(format!("{:.2}", costs.replacement_cost)),
        Cell::new(format!("{:.2}", costs.downtime_cost)),
        Cell::new(format!("{:.2}", costs.replacement_cost + costs.downtime_cost))
            .add_attribute(Attribute::Bold),
    ]);
    println!();
    println!("Immediate replacement estimate:");
    println!("{table}");
}

fn print_baseline_table(output: &PipelineOutput) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Baseline source"), header_cell("Tires")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for tier in BaselineTier::ORDER {
        table.add_row(vec![
            Cell::new(tier.label()),
            dim_or_plain(output.baseline.filled_by(tier)),
        ]);
    }
    table.add_row(vec![
        dim_cell("unresolved"),
        count_cell(output.baseline.unresolved, Color::Yellow),
    ]);
    println!();
    println!("Baseline tread:");
    println!("{table}");
}

fn print_position_table(positions: &[PositionRisk]) {
    if positions.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Position"),
        header_cell("Label"),
        header_cell("X"),
        header_cell("Y"),
        header_cell("Worst condition"),
        header_cell("Color"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for entry in positions {
        table.add_row(vec![
            Cell::new(&entry.code)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            optional_cell(entry.label.clone()),
            optional_cell(entry.x.map(format_numeric)),
            optional_cell(entry.y.map(format_numeric)),
            condition_cell(entry.condition),
            Cell::new(&entry.color),
        ]);
    }
    println!();
    println!("Positions (worst condition first):");
    println!("{table}");
}

pub fn print_sheets(workbook: &Workbook) {
    if let Some(fingerprint) = workbook.fingerprint() {
        println!("Fingerprint: {fingerprint}");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Required"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for (name, df) in workbook.sheets() {
        let required = REQUIRED_SHEETS.contains(&name);
        table.add_row(vec![
            Cell::new(name),
            Cell::new(df.height()),
            Cell::new(df.width()),
            if required {
                Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
            } else {
                dim_cell("-")
            },
        ]);
    }
    println!("{table}");
    let missing: Vec<&str> = REQUIRED_SHEETS
        .iter()
        .copied()
        .filter(|name| !workbook.contains(name))
        .collect();
    if !missing.is_empty() {
        eprintln!("Missing required sheets: {}", missing.join(", "));
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn condition_color(condition: Condition) -> Color {
    match condition {
        Condition::Critical => Color::Red,
        Condition::Alert => Color::Yellow,
        Condition::Ok => Color::Green,
    }
}

fn condition_cell(condition: Option<Condition>) -> Cell {
    match condition {
        Some(condition) => Cell::new(condition.label())
            .fg(condition_color(condition))
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_or_plain(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
