//! JSON document load and atomic save

use std::ffi::OsString;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::BACKUP_SUFFIX;
use crate::core::Document;
use crate::error::{Error, Result};

/// Load a document from disk
pub fn load(path: &Path) -> Result<Document> {
	let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
		io::ErrorKind::NotFound => Error::JsonNotFound(path.to_path_buf()),
		_ => Error::JsonRead { path: path.to_path_buf(), source },
	})?;

	serde_json::from_str(&contents).map_err(|e| Error::MalformedJson {
		path: path.to_path_buf(),
		message: e.to_string(),
	})
}

/// `<path>.backup`, next to the original
pub fn backup_path(path: &Path) -> PathBuf {
	let mut name = OsString::from(path.as_os_str());
	name.push(BACKUP_SUFFIX);
	PathBuf::from(name)
}

/// Save a document over `path`, keeping a backup of the previous contents.
///
/// The document is staged in a temp file beside the target and only renamed
/// over it once fully written and synced. Any failure before that point drops
/// the temp file and leaves the original untouched. Returns the backup path
/// when a previous file existed.
pub fn save(path: &Path, document: &Document) -> Result<Option<PathBuf>> {
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let io_err = |source: io::Error| Error::Io { path: path.to_path_buf(), source };
	let persist_err = |message: String| Error::Persist { path: path.to_path_buf(), message };

	let mut staged = NamedTempFile::new_in(dir).map_err(io_err)?;
	{
		let mut writer = BufWriter::new(&mut staged);
		serde_json::to_writer_pretty(&mut writer, document).map_err(|e| persist_err(e.to_string()))?;
		writer.flush().map_err(io_err)?;
	}
	staged.as_file().sync_all().map_err(io_err)?;

	let backup = match fs::metadata(path) {
		Ok(meta) => {
			fs::set_permissions(staged.path(), meta.permissions()).map_err(io_err)?;

			let backup = backup_path(path);
			fs::copy(path, &backup).map_err(|source| Error::Backup { path: backup.clone(), source })?;
			Some(backup)
		}
		Err(_) => None,
	};

	staged.persist(path).map_err(|e| persist_err(e.error.to_string()))?;

	Ok(backup)
}
