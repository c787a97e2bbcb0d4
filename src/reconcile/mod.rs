//! Reconciliation between the JSON document and the image folder

pub mod cleanup;
pub mod rename;

pub use cleanup::{count_images, ensure_folder, find_unused, list_folder, referenced_filenames};
pub use rename::{plan_renames, Operation, PlanWarning, RenamePlan, SkipReason};
