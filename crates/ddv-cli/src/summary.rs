use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use ddv_model::{ValidationStatus, ValidationSummary, Verdict};

/// Outcome of one `validate` run, ready for printing.
#[derive(Debug)]
pub struct ValidationRun {
    pub dictionary: PathBuf,
    pub verdicts: Vec<Verdict>,
    pub summary: ValidationSummary,
    /// Rows skipped or coerced during ingestion.
    pub ingest_issues: Vec<String>,
    pub reports: Vec<PathBuf>,
}

pub fn print_run(run: &ValidationRun, show: Option<&str>) {
    println!("Dictionary: {}", run.dictionary.display());
    for path in &run.reports {
        println!("Report: {}", path.display());
    }
    println!("{}", results_table(&run.verdicts));
    println!("{}", summary_table(&run.summary));

    let details = failure_details(&run.verdicts, show);
    if !details.is_empty() {
        println!();
        println!("Failed records:");
        print!("{details}");
    }
    if !run.ingest_issues.is_empty() {
        eprintln!("Skipped or coerced rows:");
        for issue in &run.ingest_issues {
            eprintln!("- {issue}");
        }
    }
}

pub fn results_table(verdicts: &[Verdict]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Status"),
        header_cell("Class Word"),
        header_cell("Notes"),
    ]);
    apply_results_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);
    for verdict in verdicts {
        table.add_row(vec![
            Cell::new(&verdict.table_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&verdict.column_name),
            dim_cell(&verdict.data_type),
            status_cell(verdict.status),
            suggestion_cell(&verdict.suggested_class_word),
            Cell::new(&verdict.notes),
        ]);
    }
    table
}

pub fn summary_table(summary: &ValidationSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Passed"),
        header_cell("Failed"),
        header_cell("Advisor errors"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.total).add_attribute(Attribute::Bold),
        count_cell(summary.passed, Color::Green),
        count_cell(summary.failed, Color::Red),
        count_cell(summary.advisor_errors, Color::Yellow),
    ]);
    table
}

/// Details for every failed record, or only for `show` (`TABLE.COLUMN`).
pub fn failure_details(verdicts: &[Verdict], show: Option<&str>) -> String {
    verdicts
        .iter()
        .filter(|verdict| match show {
            Some(label) => verdict.label().eq_ignore_ascii_case(label.trim()),
            None => verdict.is_fail(),
        })
        .map(record_details)
        .collect()
}

fn record_details(verdict: &Verdict) -> String {
    let mut lines = vec![
        verdict.label(),
        format!("  Status: {}", verdict.status),
        format!("  Notes: {}", verdict.notes),
    ];
    if let Some(reason) = &verdict.table_failure_reason {
        lines.push(format!("  Table issue: {reason}"));
    }
    lines.extend([
        format!("  Suggested table name: {}", or_dash(&verdict.suggested_table_name)),
        format!("  Suggested column name: {}", or_dash(&verdict.suggested_column_name)),
        format!("  Suggested class word: {}", or_dash(&verdict.suggested_class_word)),
        format!("  Additional notes: {}", verdict.additional_notes),
    ]);
    if let Some(error) = &verdict.advisor_error {
        lines.push(format!("  Advisor error: {error}"));
    }
    lines.push(format!("  Samples: {}", verdict.samples.join(" | ")));
    let mut block = lines.join("\n");
    block.push('\n');
    block
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_results_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: ValidationStatus) -> Cell {
    match status {
        ValidationStatus::Pass => Cell::new("PASS").fg(Color::Green),
        ValidationStatus::Fail => Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn suggestion_cell(code: &str) -> Cell {
    if code.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(code).fg(Color::Yellow)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
