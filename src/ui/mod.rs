//! # User Interface
//!
//! Colored terminal output and confirmation prompts.

pub mod log;
pub mod prompt;

pub use log::{banner, debug, detail, error, header, info, success, summary, warn, Log};
pub use prompt::{AssumeYes, Confirm, Prompt};
