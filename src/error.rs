//! Fatal error types
//!
//! Only failures that abort a whole run live here. Per-item problems (stale
//! references, collisions, a single failed rename) are reported as values by
//! the reconciler and executor instead.

use std::path::PathBuf;

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// JSON document does not exist
	#[error("JSON file '{}' not found", .0.display())]
	JsonNotFound(PathBuf),

	/// JSON document exists but could not be read
	#[error("failed to read JSON file '{}': {source}", path.display())]
	JsonRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// JSON document is not valid JSON or not a list of records
	#[error("invalid JSON format in '{}': {message}", path.display())]
	MalformedJson { path: PathBuf, message: String },

	/// Image folder is missing or not a directory
	#[error("data folder '{}' does not exist", .0.display())]
	FolderNotFound(PathBuf),

	/// Backup copy could not be made before overwriting
	#[error("failed to create backup '{}': {source}", path.display())]
	Backup {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// Updated document could not be written
	#[error("failed to save JSON file '{}': {message}", path.display())]
	Persist { path: PathBuf, message: String },

	#[error("I/O error on '{}': {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}
