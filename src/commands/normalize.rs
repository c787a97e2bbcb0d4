//! Normalize command - strip hash suffixes from filenames and patch the JSON

use anyhow::{Context, Result};

use super::{Outcome, PipelineOptions};
use crate::core::Document;
use crate::execute;
use crate::reconcile::{self, RenamePlan};
use crate::storage;
use crate::ui::{self, Confirm};

pub fn run(opts: &PipelineOptions, confirm: &mut dyn Confirm) -> Result<Outcome> {
    ui::info(&format!("Loading JSON data from: {}", opts.json_file.display()));
    let mut document = storage::load(&opts.json_file)?;
    ui::debug(&format!("{} records loaded", document.len()));

    reconcile::ensure_folder(&opts.data_folder)?;
    ui::info(&format!("Analyzing files in: {}", opts.data_folder.display()));
    let plan = reconcile::plan_renames(&document, &opts.data_folder);

    for warning in &plan.warnings {
        ui::warn(&format!("Record #{}: {}", warning.record + 1, warning));
    }

    if plan.is_empty() {
        ui::success("No files need normalization");
        return Ok(Outcome::NothingToDo);
    }

    preview(&plan, &document);

    if opts.dry_run {
        ui::info("Dry run mode: no files or JSON would be modified");
        return Ok(Outcome::DryRun { planned: plan.operations.len() });
    }

    let question = format!(
        "Do you want to proceed with normalizing {} files?",
        plan.operations.len()
    );
    if !confirm.confirm(&question)? {
        ui::info("Operation cancelled");
        return Ok(Outcome::Cancelled);
    }

    ui::header("Processing files");
    let report = execute::execute(&plan.operations, &mut document);

    for &idx in &report.renamed {
        let op = &plan.operations[idx];
        ui::success(&format!("Renamed: {} -> {}", op.source_name(), op.filename));
    }
    for failure in &report.failures {
        let op = &plan.operations[failure.operation];
        ui::error(&format!("Error processing {}: {}", op.source_name(), failure.error));
    }

    let succeeded = report.success_count();
    if succeeded > 0 {
        ui::info("Saving updated JSON data...");
        let backup = storage::save(&opts.json_file, &document).with_context(|| {
            format!("{} files were renamed but the JSON file was not updated", succeeded)
        })?;
        if let Some(backup) = backup {
            ui::info(&format!("Created backup: {}", backup.display()));
        }
        ui::success(&format!("Successfully normalized {} files and updated JSON", succeeded));
    } else {
        ui::warn("No files were successfully processed");
    }

    ui::summary("Renamed", succeeded, plan.warnings.len(), report.failures.len());

    Ok(Outcome::Applied {
        succeeded,
        failed: report.failures.len(),
    })
}

fn preview(plan: &RenamePlan, document: &Document) {
    ui::header(&format!("Found {} files to normalize", plan.operations.len()));

    for op in &plan.operations {
        println!("  File: {}", op.source_name());
        println!("    -> {}", op.filename);
        for record in op.records() {
            let title = document.title(record).unwrap_or("N/A");
            ui::detail(&format!("JSON record #{}:", record + 1), title);
        }
        println!();
    }
}
