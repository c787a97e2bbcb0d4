//! Rename planning for filename normalization

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::{normalize, trailing_segment, Document};

/// One planned rename plus the records whose `image_url` it patches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
	pub source: PathBuf,
	pub destination: PathBuf,
	/// Canonical filename written into the patched `image_url`
	pub filename: String,
	/// Record that first referenced `source`
	pub record: usize,
	/// Later records referencing the same file
	pub shared_records: Vec<usize>,
}

impl Operation {
	/// All record indices patched when the rename succeeds, in document order
	pub fn records(&self) -> impl Iterator<Item = usize> + '_ {
		std::iter::once(self.record).chain(self.shared_records.iter().copied())
	}

	pub fn source_name(&self) -> String {
		display_name(&self.source)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
	/// `image_url` points at a file absent from the folder
	MissingSource,
	/// Canonical name is already taken on disk
	DestinationExists,
	/// Canonical name is the target of an earlier planned rename
	DestinationClaimed { by_record: usize },
}

/// A record left out of the plan, with the path that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanWarning {
	pub record: usize,
	pub path: PathBuf,
	pub reason: SkipReason,
}

impl fmt::Display for PlanWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.reason {
			SkipReason::MissingSource => write!(f, "File not found: {}", self.path.display()),
			SkipReason::DestinationExists => {
				write!(f, "Target filename already exists: {}", self.path.display())
			}
			SkipReason::DestinationClaimed { by_record } => write!(
				f,
				"Target filename already claimed by record #{}: {}",
				by_record + 1,
				self.path.display()
			),
		}
	}
}

#[derive(Debug, Default)]
pub struct RenamePlan {
	pub operations: Vec<Operation>,
	pub warnings: Vec<PlanWarning>,
}

impl RenamePlan {
	pub fn is_empty(&self) -> bool {
		self.operations.is_empty()
	}
}

/// Plans the renames needed to normalize every referenced filename.
///
/// Records are visited in document order and the first record to claim a
/// destination wins; later colliding records are skipped with a warning.
/// Sources must exist on disk at planning time.
pub fn plan_renames(document: &Document, folder: &Path) -> RenamePlan {
	let mut plan = RenamePlan::default();
	let mut by_source: HashMap<PathBuf, usize> = HashMap::new();
	let mut claimed: HashMap<PathBuf, usize> = HashMap::new();

	for (index, url) in document.image_urls() {
		let Some(current) = trailing_segment(url) else { continue };

		let canonical = normalize(current);
		if canonical == current {
			continue;
		}

		let source = folder.join(current);
		let destination = folder.join(&canonical);

		if let Some(&op) = by_source.get(&source) {
			plan.operations[op].shared_records.push(index);
			continue;
		}

		if !source.exists() {
			plan.warnings.push(PlanWarning { record: index, path: source, reason: SkipReason::MissingSource });
			continue;
		}

		if destination.exists() && destination != source {
			plan.warnings.push(PlanWarning { record: index, path: destination, reason: SkipReason::DestinationExists });
			continue;
		}

		if let Some(&by_record) = claimed.get(&destination) {
			plan.warnings.push(PlanWarning {
				record: index,
				path: destination,
				reason: SkipReason::DestinationClaimed { by_record },
			});
			continue;
		}

		by_source.insert(source.clone(), plan.operations.len());
		claimed.insert(destination.clone(), index);
		plan.operations.push(Operation {
			source,
			destination,
			filename: canonical,
			record: index,
			shared_records: Vec::new(),
		});
	}

	plan
}

fn display_name(path: &Path) -> String {
	path.file_name()
		.map(|n| n.to_string_lossy().into_owned())
		.unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;
	use std::collections::HashSet;
	use std::fs;
	use tempfile::TempDir;

	fn doc(urls: &[&str]) -> Document {
		Document::new(urls.iter().map(|u| json!({ "image_url": u })).collect())
	}

	fn touch(dir: &Path, names: &[&str]) {
		for name in names {
			fs::write(dir.join(name), name.as_bytes()).unwrap();
		}
	}

	#[test]
	fn plans_hash_removal() {
		let dir = TempDir::new().unwrap();
		let name = "1860-12-26_a-merry-christmas_Desconhecido_6733e6c8a768333c2576e98d.png";
		touch(dir.path(), &[name]);

		let plan = plan_renames(&doc(&[&format!("imgs/{}", name)]), dir.path());

		assert!(plan.warnings.is_empty());
		assert_eq!(plan.operations.len(), 1);
		let op = &plan.operations[0];
		assert_eq!(op.source, dir.path().join(name));
		assert_eq!(op.destination, dir.path().join("1860-12-26_a-merry-christmas_Desconhecido.png"));
		assert_eq!(op.filename, "1860-12-26_a-merry-christmas_Desconhecido.png");
		assert_eq!(op.record, 0);
	}

	#[test]
	fn skips_records_without_work() {
		let dir = TempDir::new().unwrap();
		touch(dir.path(), &["plain.png"]);

		let document = Document::new(vec![
			json!({"title": "no url"}),
			json!({"image_url": ""}),
			json!({"image_url": "imgs/plain.png"}),
		]);
		let plan = plan_renames(&document, dir.path());

		assert!(plan.is_empty());
		assert!(plan.warnings.is_empty());
	}

	#[test]
	fn warns_on_stale_reference() {
		let dir = TempDir::new().unwrap();

		let plan = plan_renames(&doc(&["imgs/gone_123.png"]), dir.path());

		assert!(plan.is_empty());
		assert_eq!(plan.warnings.len(), 1);
		assert_eq!(plan.warnings[0].reason, SkipReason::MissingSource);
		assert_eq!(plan.warnings[0].path, dir.path().join("gone_123.png"));
		assert!(plan.warnings[0].to_string().starts_with("File not found: "));
	}

	#[test]
	fn warns_when_destination_exists_on_disk() {
		let dir = TempDir::new().unwrap();
		touch(dir.path(), &["cat_1.png", "cat.png"]);

		let plan = plan_renames(&doc(&["cat_1.png"]), dir.path());

		assert!(plan.is_empty());
		assert_eq!(plan.warnings[0].reason, SkipReason::DestinationExists);
		assert_eq!(plan.warnings[0].path, dir.path().join("cat.png"));
	}

	#[test]
	fn first_claim_on_destination_wins() {
		let dir = TempDir::new().unwrap();
		touch(dir.path(), &["dog_1.png", "dog_2.png"]);

		let plan = plan_renames(&doc(&["dog_2.png", "dog_1.png"]), dir.path());

		assert_eq!(plan.operations.len(), 1);
		assert_eq!(plan.operations[0].source, dir.path().join("dog_2.png"));
		assert_eq!(plan.warnings.len(), 1);
		assert_eq!(plan.warnings[0].record, 1);
		assert_eq!(plan.warnings[0].reason, SkipReason::DestinationClaimed { by_record: 0 });
	}

	#[test]
	fn shared_source_patches_every_record() {
		let dir = TempDir::new().unwrap();
		touch(dir.path(), &["bird_9.png"]);

		let plan = plan_renames(&doc(&["a/bird_9.png", "x", r"b\bird_9.png"]), dir.path());

		assert_eq!(plan.operations.len(), 1);
		assert!(plan.warnings.is_empty());
		assert_eq!(plan.operations[0].records().collect::<Vec<_>>(), vec![0, 2]);
	}

	proptest! {
		#[test]
		fn destinations_are_never_shared(
			names in proptest::collection::vec("[ab]_[0-9]{1,2}\\.png", 1..12),
		) {
			let dir = TempDir::new().unwrap();
			for name in &names {
				fs::write(dir.path().join(name), b"x").unwrap();
			}
			let urls: Vec<&str> = names.iter().map(String::as_str).collect();

			let plan = plan_renames(&doc(&urls), dir.path());

			let mut destinations = HashSet::new();
			for op in &plan.operations {
				prop_assert!(op.source.exists());
				prop_assert!(destinations.insert(op.destination.clone()));
			}
		}
	}
}
