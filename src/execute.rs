//! Plan execution: renames with JSON patches, and unused image deletion

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::core::{rewrite_image_url, Document};
use crate::reconcile::Operation;

/// A rename that did not happen; its records were left untouched
#[derive(Debug)]
pub struct RenameFailure {
	/// Index into the executed operations
	pub operation: usize,
	pub error: io::Error,
}

#[derive(Debug, Default)]
pub struct ExecutionReport {
	/// Indices of operations whose rename and patch both went through
	pub renamed: Vec<usize>,
	pub failures: Vec<RenameFailure>,
}

impl ExecutionReport {
	pub fn success_count(&self) -> usize {
		self.renamed.len()
	}
}

/// Applies each operation in order.
///
/// A record is patched only after its file was renamed, so a failed rename
/// leaves that record as it was. Earlier successful renames are never rolled
/// back.
pub fn execute(operations: &[Operation], document: &mut Document) -> ExecutionReport {
	let mut report = ExecutionReport::default();

	for (idx, op) in operations.iter().enumerate() {
		if let Err(error) = fs::rename(&op.source, &op.destination) {
			report.failures.push(RenameFailure { operation: idx, error });
			continue;
		}

		for record in op.records() {
			let patched = document
				.image_url(record)
				.map(|url| rewrite_image_url(url, &op.filename));
			if let Some(url) = patched {
				document.set_image_url(record, url);
			}
		}

		report.renamed.push(idx);
	}

	report
}

#[derive(Debug, Default)]
pub struct DeletionReport {
	pub deleted: Vec<String>,
	pub failures: Vec<(String, io::Error)>,
}

/// Deletes the named files from `folder`, continuing past individual failures
pub fn delete_unused(folder: &Path, names: &BTreeSet<String>) -> DeletionReport {
	let mut report = DeletionReport::default();

	for name in names {
		match fs::remove_file(folder.join(name)) {
			Ok(()) => report.deleted.push(name.clone()),
			Err(e) => report.failures.push((name.clone(), e)),
		}
	}

	report
}
