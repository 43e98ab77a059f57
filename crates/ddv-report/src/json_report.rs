use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use ddv_model::{ValidationSummary, Verdict};
use serde::Serialize;

/// Schema tag written at the top of every JSON report.
pub const REPORT_SCHEMA: &str = "ddv.validation-report.v1";

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub schema: &'static str,
    pub generated_at: String,
    pub source: String,
    pub summary: ValidationSummary,
    pub verdicts: &'a [Verdict],
}

impl<'a> JsonReport<'a> {
    pub fn new(source: &Path, verdicts: &'a [Verdict], generated_at: DateTime<Utc>) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            source: source.display().to_string(),
            summary: ValidationSummary::from_verdicts(verdicts),
            verdicts,
        }
    }
}

pub fn write_json_report(path: &Path, report: &JsonReport<'_>) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
