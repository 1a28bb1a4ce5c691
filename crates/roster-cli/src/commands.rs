use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use roster_export::{XlsxOptions, csv_text, project, write_xlsx};
use roster_ingest::read_employees;
use roster_model::{DateRange, RosterTable};

use crate::cli::{ClassifyArgs, ExportArgs, ExportFormatArg, RosterArgs};
use crate::grid::{print_classification, print_codes, print_roster};
use roster_cli::batch::{BatchOutcome, apply_batch, load_batch};

/// Default export file stem, matching the original tool's download name.
const DEFAULT_EXPORT_STEM: &str = "LichLamViec";

#[derive(Debug)]
pub struct ExportOutcome {
    pub rows: usize,
    pub day_count: usize,
    pub applied: usize,
    pub rejected: usize,
    pub outputs: Vec<PathBuf>,
}

pub fn run_show(args: &RosterArgs) -> Result<()> {
    let (table, outcome) = build_roster(args)?;
    print_roster(&table);
    if !outcome.rejected.is_empty() {
        println!(
            "{} assignment(s) rejected, see warnings above.",
            outcome.rejected.len()
        );
    }
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<ExportOutcome> {
    let (table, batch_outcome) = build_roster(&args.roster)?;
    let labels = table.range().labels();
    let records = project(&table);

    let mut outputs = Vec::new();
    let (want_xlsx, want_csv) = match args.format {
        ExportFormatArg::Xlsx => (true, false),
        ExportFormatArg::Csv => (false, true),
        ExportFormatArg::Both => (true, true),
    };
    if want_xlsx {
        let path = output_path(args, "xlsx");
        write_xlsx(&records, &labels, &XlsxOptions::default(), &path)
            .with_context(|| format!("write {}", path.display()))?;
        outputs.push(path);
    }
    if want_csv {
        let path = output_path(args, "csv");
        let text = csv_text(&records, &labels)?;
        std::fs::write(&path, text).with_context(|| format!("write {}", path.display()))?;
        outputs.push(path);
    }
    info!(
        rows = records.len(),
        days = labels.len(),
        outputs = outputs.len(),
        "export complete"
    );
    Ok(ExportOutcome {
        rows: records.len(),
        day_count: labels.len(),
        applied: batch_outcome.applied,
        rejected: batch_outcome.rejected.len(),
        outputs,
    })
}

pub fn run_codes() -> Result<()> {
    print_codes();
    Ok(())
}

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    print_classification(&args.positions);
    Ok(())
}

/// Ingest the employee list, build the table for the requested range,
/// and apply the assignment batch when one was given.
fn build_roster(args: &RosterArgs) -> Result<(RosterTable, BatchOutcome)> {
    let span = info_span!("roster", employees = %args.employees.display());
    let _guard = span.enter();

    let employees = read_employees(&args.employees).context("read employee list")?;
    let range = DateRange::new(args.start, args.end)?;
    let mut table = RosterTable::build(employees, range);
    info!(
        rows = table.row_count(),
        days = range.day_count(),
        "roster built"
    );

    let outcome = match &args.assignments {
        Some(path) => {
            let entries = load_batch(path)
                .with_context(|| format!("load assignments {}", path.display()))?;
            let outcome = apply_batch(&mut table, &entries);
            info!(
                applied = outcome.applied,
                rejected = outcome.rejected.len(),
                "assignments applied"
            );
            outcome
        }
        None => BatchOutcome::default(),
    };
    Ok((table, outcome))
}

fn output_path(args: &ExportArgs, extension: &str) -> PathBuf {
    match &args.output {
        Some(path) => {
            if matches!(args.format, ExportFormatArg::Both) {
                path.with_extension(extension)
            } else {
                path.clone()
            }
        }
        None => PathBuf::from(format!("{DEFAULT_EXPORT_STEM}.{extension}")),
    }
}
