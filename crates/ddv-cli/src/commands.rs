use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::{Local, Utc};
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span, trace, warn};

use ddv_advisor::{ChatClient, ModelAdvisor, OfflineAdvisor};
use ddv_cli::config::DdvConfig;
use ddv_cli::logging::redact_value;
use ddv_cli::summary::{ValidationRun, apply_table_style};
use ddv_ingest::read_dictionary;
use ddv_model::{CorrectionAdvisor, SampleGenerator, ValidationSummary};
use ddv_report::{ReportFormat, write_reports};
use ddv_standards::{
    ReferenceData, StandardsPaths, load_abbreviations, load_class_words, load_domain_rules,
    save_abbreviations, save_class_words, save_domain_rules,
};
use ddv_validate::{NamingConventionEngine, SampleSynthesizer, ValidationContext};

use crate::cli::{ReferenceArgs, ReportFormatArg, StandardsAction, StandardsArgs, ValidateArgs};

pub fn run_validate(config_path: Option<&Path>, args: &ValidateArgs) -> Result<ValidationRun> {
    let span = info_span!("validate", dictionary = %args.dictionary.display());
    let _validate_guard = span.enter();
    let started = Instant::now();

    let mut config = DdvConfig::load(config_path)?;
    if let Some(model) = &args.model {
        config.advisor.model.clone_from(model);
    }
    let paths = reference_paths(&config, &args.reference).with_domain_rules(args.domain_rules.clone());
    let reference = ReferenceData::load(&paths, &config.class_word_type_overrides())
        .context("load reference data")?;

    let dictionary = read_dictionary(&args.dictionary)
        .with_context(|| format!("read dictionary {}", args.dictionary.display()))?;
    let ingest_issues: Vec<String> = dictionary
        .issues
        .iter()
        .map(|issue| {
            warn!(line = issue.line, message = %issue.message, "dictionary row issue");
            format!("line {}: {}", issue.line, issue.message)
        })
        .collect();

    let model_advisor = if args.offline || !config.advisor.enabled {
        info!("advisor disabled, running offline");
        None
    } else {
        match ChatClient::from_settings(&config.advisor) {
            Ok(client) => {
                info!(model = %client.model(), "using model advisor");
                Some(ModelAdvisor::new(client))
            }
            Err(error) => {
                warn!(%error, "advisor unavailable, running offline");
                None
            }
        }
    };
    let (advisor, fallback): (&dyn CorrectionAdvisor, &dyn SampleGenerator) = match &model_advisor {
        Some(model) => (model, model),
        None => (&OfflineAdvisor, &OfflineAdvisor),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let synthesizer = SampleSynthesizer::new(Local::now().date_naive(), fallback);
    let context = ValidationContext::new(
        &reference.abbreviations,
        &reference.class_words,
        &reference.class_word_types,
    )
    .with_table_rules(config.table_names.clone())
    .with_domain_rules(&reference.domain_rules);
    let engine = NamingConventionEngine::new(context, advisor, synthesizer);

    for row in &dictionary.rows {
        trace!(
            table = %row.table_name,
            column = %row.column_name,
            english_name = %redact_value(&row.english_name),
            description = %redact_value(&row.description),
            "dictionary row"
        );
    }

    let progress = progress_bar(dictionary.rows.len())?;
    let verdicts = engine.validate_rows_with(&dictionary.rows, &mut rng, |verdict| {
        progress.set_message(verdict.label());
        progress.inc(1);
    });
    progress.finish_and_clear();

    let summary = ValidationSummary::from_verdicts(&verdicts);
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| dictionary_dir(&args.dictionary));
    let reports = write_reports(
        &output_dir,
        &args.dictionary,
        report_format(args.format),
        &verdicts,
        Utc::now(),
    )?;

    info!(
        rows = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        advisor_errors = summary.advisor_errors,
        elapsed_ms = started.elapsed().as_millis(),
        "validation complete"
    );

    Ok(ValidationRun {
        dictionary: args.dictionary.clone(),
        verdicts,
        summary,
        ingest_issues,
        reports,
    })
}

pub fn run_standards(config_path: Option<&Path>, args: &StandardsArgs) -> Result<()> {
    let config = DdvConfig::load(config_path)?;
    if let Some(StandardsAction::Import(import)) = &args.action {
        return import_standards(&config.standards_paths(), import);
    }

    let paths = reference_paths(&config, &args.reference);
    let reference = ReferenceData::load(&paths, &config.class_word_type_overrides())
        .context("load reference data")?;

    let mut abbreviations = Table::new();
    abbreviations.set_header(vec!["Name", "Abbreviation"]);
    apply_table_style(&mut abbreviations);
    for (name, abbreviation) in reference.abbreviations.iter() {
        abbreviations.add_row(vec![name, abbreviation]);
    }
    println!("Abbreviations: {}", paths.abbreviations.display());
    println!("{abbreviations}");

    let class_words: Vec<&str> = reference.class_words.iter().collect();
    println!("Class words: {}", paths.class_words.display());
    println!("{}", class_words.join(", "));

    let mut types = Table::new();
    types.set_header(vec!["Class Word", "Expected Data Types"]);
    apply_table_style(&mut types);
    for (code, expected) in reference.class_word_types.iter() {
        let expected: Vec<&str> = expected.iter().map(String::as_str).collect();
        types.add_row(vec![code.to_string(), expected.join(", ")]);
    }
    println!("Class word data types:");
    println!("{types}");
    Ok(())
}

pub fn run_rules_show(config_path: Option<&Path>) -> Result<()> {
    let config = DdvConfig::load(config_path)?;
    let paths = config.standards_paths();
    let rules = load_domain_rules(&paths.domain_rules)?;
    if rules.trim().is_empty() {
        println!("No domain rules set ({}).", paths.domain_rules.display());
    } else {
        println!("{}", rules.trim_end());
    }
    Ok(())
}

pub fn run_rules_set(config_path: Option<&Path>, file: &Path) -> Result<()> {
    let config = DdvConfig::load(config_path)?;
    let text = std::fs::read_to_string(file).with_context(|| format!("read {}", file.display()))?;
    let target = config.standards_paths().domain_rules;
    save_domain_rules(&target, &text)?;
    info!(path = %target.display(), bytes = text.len(), "saved domain rules");
    println!("Saved domain rules to {}", target.display());
    Ok(())
}

fn import_standards(targets: &StandardsPaths, import: &ReferenceArgs) -> Result<()> {
    if import.abbreviations.is_none() && import.class_words.is_none() {
        bail!("nothing to import: pass --abbreviations and/or --class-words");
    }
    if let Some(source) = &import.abbreviations {
        let dictionary = load_abbreviations(source)?;
        save_abbreviations(&targets.abbreviations, &dictionary)?;
        println!(
            "Imported {} abbreviations into {}",
            dictionary.len(),
            targets.abbreviations.display()
        );
    }
    if let Some(source) = &import.class_words {
        let class_words = load_class_words(source)?;
        save_class_words(&targets.class_words, &class_words)?;
        println!(
            "Imported {} class words into {}",
            class_words.len(),
            targets.class_words.display()
        );
    }
    Ok(())
}

fn reference_paths(config: &DdvConfig, overrides: &ReferenceArgs) -> StandardsPaths {
    config
        .standards_paths()
        .with_abbreviations(overrides.abbreviations.clone())
        .with_class_words(overrides.class_words.clone())
}

fn dictionary_dir(dictionary: &Path) -> PathBuf {
    match dictionary.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn report_format(format: ReportFormatArg) -> ReportFormat {
    match format {
        ReportFormatArg::Csv => ReportFormat::Csv,
        ReportFormatArg::Json => ReportFormat::Json,
        ReportFormatArg::Both => ReportFormat::Both,
    }
}

fn progress_bar(rows: usize) -> Result<ProgressBar> {
    if !io::stderr().is_terminal() {
        return Ok(ProgressBar::hidden());
    }
    let progress = ProgressBar::new(rows as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );
    Ok(progress)
}
