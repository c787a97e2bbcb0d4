//! # imgsync
//!
//! Keeps a JSON image catalog and its image folder consistent.
//! Provides unused image pruning and hash-suffix filename normalization.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod execute;
pub mod reconcile;
pub mod storage;
pub mod ui;

pub use error::{Error, Result};
