//! JSON document storage

pub mod json;

pub use json::{backup_path, load, save};
