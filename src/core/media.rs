//! Image file detection

use std::path::Path;

use crate::config::IMAGE_EXTENSIONS;

/// True when the file extension is on the image allow-list (case-insensitive).
pub fn is_image(path: &Path) -> bool {
	let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
		return false;
	};

	IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}
