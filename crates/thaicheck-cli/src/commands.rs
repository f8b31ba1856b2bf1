//! Subcommand implementations shared by the binary and its tests.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use thaicheck_ingest::{CsvRows, IngestOptions, read_csv_rows, read_csv_rows_from_stream};
use thaicheck_model::{RowValidation, Summary, ValidationReport};
use thaicheck_validate::{count_fields, resolve_fields, summarize, validate_rows};

use crate::cli::{CheckIdArgs, ColumnsArgs, ReportFormatArg, ValidateArgs};
use crate::logging::redact_value;
use crate::render::{IdCheck, columns_table, counts_table, id_table, results_table, summary_line};

const STDIN_MARKER: &str = "-";

/// Loads rows from a file, or from stdin when `input` is `-`.
///
/// The size limit and encoding checks apply to both.
pub fn load_rows(input: &Path, max_file_size: u64) -> Result<CsvRows> {
    let options = IngestOptions { max_file_size };
    let data = if input == Path::new(STDIN_MARKER) {
        read_csv_rows_from_stream(io::stdin().lock(), Path::new("<stdin>"), &options)
    } else {
        read_csv_rows(input, &options)
    };
    data.with_context(|| format!("load {}", input.display()))
}

/// Assembles the report for one validation pass.
///
/// `columns` reflects the file header; each row still resolves on its own.
pub fn build_report<'a>(
    source: impl Into<String>,
    headers: &'a [String],
    results: &[RowValidation<'a>],
) -> ValidationReport<'a> {
    let columns = resolve_fields(headers.iter().map(String::as_str));
    ValidationReport::new(
        source,
        columns,
        summarize(results),
        count_fields(results),
        results,
    )
}

/// Exit status of a finished `validate` run.
pub fn validate_exit_code(summary: &Summary, fail_on_invalid: bool) -> i32 {
    i32::from(fail_on_invalid && !summary.all_valid())
}

/// Exit status of `check-id`: 1 when any ID failed.
pub fn check_id_exit_code(all_valid: bool) -> i32 {
    i32::from(!all_valid)
}

pub fn run_validate(args: &ValidateArgs) -> Result<Summary> {
    let source = args.input.display().to_string();
    let span = info_span!("validate", source = %source);
    let _guard = span.enter();

    let ingest_start = Instant::now();
    let data = load_rows(&args.input, args.max_file_size)?;
    info!(
        rows = data.rows.len(),
        columns = data.headers.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let validate_start = Instant::now();
    let results = validate_rows(&data.rows);
    log_failures(&results);
    let report = build_report(source, &data.headers, &results);
    let summary = report.summary;
    info!(
        valid = summary.valid,
        total = summary.total,
        duration_ms = validate_start.elapsed().as_millis(),
        "validation complete"
    );

    match args.format {
        ReportFormatArg::Table => {
            println!("{}", results_table(&results, args.invalid_only));
            println!("{}", counts_table(&summary, &report.field_counts));
            println!("{}", summary_line(&summary));
        }
        ReportFormatArg::Json if args.output.is_none() => {
            let json = serde_json::to_string_pretty(&report).context("serialize report")?;
            println!("{json}");
        }
        ReportFormatArg::Json => {}
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(summary)
}

fn log_failures(results: &[RowValidation<'_>]) {
    for result in results.iter().filter(|result| !result.is_valid()) {
        trace!(
            row = result.index + 1,
            invalid = ?result.invalid_fields(),
            id = redact_value(result.id.value),
            name = redact_value(result.name.value),
            address = redact_value(result.address.value),
            "row failed validation"
        );
    }
}

/// Returns true when every ID is valid.
pub fn run_check_id(args: &CheckIdArgs) -> Result<bool> {
    let checks: Vec<IdCheck> = args.ids.iter().map(String::as_str).map(IdCheck::new).collect();
    println!("{}", id_table(&checks));
    let invalid = checks.iter().filter(|check| !check.valid).count();
    info!(checked = checks.len(), invalid, "id check complete");
    Ok(invalid == 0)
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let data = load_rows(&args.input, args.max_file_size)?;
    println!("Input: {}", args.input.display());
    println!("{}", columns_table(&data.headers));
    Ok(())
}
