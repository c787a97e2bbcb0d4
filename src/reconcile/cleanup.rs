//! Unused image detection

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::{is_image, trailing_segment, Document};
use crate::error::{Error, Result};
use crate::ui;

/// Filenames referenced by any record's `image_url`
pub fn referenced_filenames(document: &Document) -> BTreeSet<String> {
	document
		.image_urls()
		.filter_map(|(_, url)| trailing_segment(url))
		.map(str::to_string)
		.collect()
}

/// Fails with [`Error::FolderNotFound`] unless `folder` is an existing directory
pub fn ensure_folder(folder: &Path) -> Result<()> {
	if folder.is_dir() {
		Ok(())
	} else {
		Err(Error::FolderNotFound(folder.to_path_buf()))
	}
}

/// Names of the regular files directly inside `folder`.
///
/// Not recursive. Names that are not valid UTF-8 are skipped since they can
/// never match a JSON reference; each one is reported at debug level.
pub fn list_folder(folder: &Path) -> Result<Vec<String>> {
	ensure_folder(folder)?;

	let entries = fs::read_dir(folder).map_err(|source| Error::Io {
		path: folder.to_path_buf(),
		source,
	})?;

	collect_file_names(folder, entries.map(|entry| entry.map(|e| e.path())))
}

/// An unreadable entry fails the whole listing rather than shrinking it.
fn collect_file_names<I>(folder: &Path, entries: I) -> Result<Vec<String>>
where
	I: IntoIterator<Item = io::Result<PathBuf>>,
{
	let mut names = Vec::new();
	for entry in entries {
		let path = entry.map_err(|source| Error::Io {
			path: folder.to_path_buf(),
			source,
		})?;
		if !path.is_file() {
			continue;
		}
		match path.file_name().and_then(|n| n.to_str()) {
			Some(name) => names.push(name.to_string()),
			None => ui::debug(&format!("Skipped non UTF-8 filename: {}", path.display())),
		}
	}

	names.sort();
	Ok(names)
}

/// Image files of `folder_listing` that no record references
pub fn find_unused<I, S>(document: &Document, folder_listing: I) -> BTreeSet<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let referenced = referenced_filenames(document);

	folder_listing
		.into_iter()
		.filter_map(|entry| {
			let name: &str = entry.as_ref();
			(is_image(Path::new(name)) && !referenced.contains(name)).then(|| name.to_string())
		})
		.collect()
}

/// Number of allow-listed images in a folder listing
pub fn count_images<S: AsRef<str>>(folder_listing: &[S]) -> usize {
	folder_listing
		.iter()
		.filter(|entry| {
			let name: &str = entry.as_ref();
			is_image(Path::new(name))
		})
		.count()
}
