//! Validation report writers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use ddv_model::Verdict;
use tracing::info;

mod csv_report;
mod json_report;

pub use csv_report::{REPORT_COLUMNS, report_record, write_csv_report};
pub use json_report::{JsonReport, REPORT_SCHEMA, write_json_report};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
    Both,
}

impl ReportFormat {
    fn wants_csv(self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }

    fn wants_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

/// Report file stem: `<dictionary stem>_validation`.
pub fn report_stem(source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "dictionary".to_string());
    format!("{stem}_validation")
}

/// Write the requested reports into `output_dir` and return their paths.
pub fn write_reports(
    output_dir: &Path,
    source: &Path,
    format: ReportFormat,
    verdicts: &[Verdict],
    generated_at: DateTime<Utc>,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let stem = report_stem(source);
    let mut written = Vec::new();
    if format.wants_csv() {
        let path = output_dir.join(format!("{stem}.csv"));
        write_csv_report(&path, verdicts)?;
        written.push(path);
    }
    if format.wants_json() {
        let path = output_dir.join(format!("{stem}.json"));
        write_json_report(&path, &JsonReport::new(source, verdicts, generated_at))?;
        written.push(path);
    }
    for path in &written {
        info!(path = %path.display(), rows = verdicts.len(), "report written");
    }
    Ok(written)
}
