use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use ddv_model::Verdict;

/// Report columns, in output order.
pub const REPORT_COLUMNS: &[&str] = &[
    "Table Name",
    "Column Name",
    "English Name",
    "Data Type",
    "Precision",
    "Scale",
    "Validation Status",
    "Notes",
    "Suggested Table Name",
    "Suggested Column Name",
    "Suggested Class Word",
    "Additional Notes",
    "Corrected Description",
    "Sample Data 1",
    "Sample Data 2",
    "Sample Data 3",
];

/// One report record per verdict, matching [`REPORT_COLUMNS`].
pub fn report_record(verdict: &Verdict) -> Vec<String> {
    let [first, second, third] = &verdict.samples;
    vec![
        verdict.table_name.clone(),
        verdict.column_name.clone(),
        verdict.english_name.clone(),
        verdict.data_type.clone(),
        verdict.precision.to_string(),
        verdict.scale.to_string(),
        verdict.status.to_string(),
        verdict.notes.clone(),
        verdict.suggested_table_name.clone(),
        verdict.suggested_column_name.clone(),
        verdict.suggested_class_word.clone(),
        verdict.additional_notes.clone(),
        verdict.corrected_description.clone(),
        first.clone(),
        second.clone(),
        third.clone(),
    ]
}

pub fn write_csv_report(path: &Path, verdicts: &[Verdict]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(REPORT_COLUMNS)
        .with_context(|| format!("write header to {}", path.display()))?;
    for verdict in verdicts {
        writer
            .write_record(report_record(verdict))
            .with_context(|| format!("write {} to {}", verdict.label(), path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
