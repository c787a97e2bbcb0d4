//! # Command Implementations
//!
//! Each submodule drives one pipeline end to end: load, plan, confirm,
//! execute, persist.

use std::path::PathBuf;

pub mod normalize;
pub mod prune;

/// Inputs shared by both pipelines
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub json_file: PathBuf,
    pub data_folder: PathBuf,
    /// Show the plan only; never prompt or mutate
    pub dry_run: bool,
}

/// How a pipeline run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Folder and JSON already consistent
    NothingToDo,
    DryRun { planned: usize },
    Cancelled,
    Applied { succeeded: usize, failed: usize },
}
