//! Filename normalization and `image_url` segment handling

use std::ops::Range;

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Strips the trailing hash suffix from a filename.
///
/// Everything after the last `_` of the stem is dropped and the extension is
/// re-appended: `1860-12-26_a-merry-christmas_Desconhecido_6733e6c8.png`
/// becomes `1860-12-26_a-merry-christmas_Desconhecido.png`. A stem without
/// `_` is returned unchanged. An empty stem after truncation is kept as is.
pub fn normalize(filename: &str) -> String {
	let (stem, extension) = split_extension(filename);

	match stem.rfind('_') {
		Some(idx) => format!("{}{}", &stem[..idx], extension),
		None => filename.to_string(),
	}
}

/// Splits a filename into `(stem, extension)` at the last dot.
///
/// A dot preceded only by other dots does not start an extension, so `.png`
/// and `..png` are all stem.
pub fn split_extension(filename: &str) -> (&str, &str) {
	let Some(dot) = filename.rfind('.') else {
		return (filename, "");
	};

	if filename[..dot].bytes().all(|b| b == b'.') {
		return (filename, "");
	}

	filename.split_at(dot)
}

/// Last non-empty path component of an `image_url`, splitting on `/` and `\`.
pub fn trailing_segment(image_url: &str) -> Option<&str> {
	segment_range(image_url).map(|range| &image_url[range])
}

/// Replaces the trailing filename of an `image_url`, leaving every separator
/// byte where it was.
pub fn rewrite_image_url(image_url: &str, filename: &str) -> String {
	let Some(range) = segment_range(image_url) else {
		return image_url.to_string();
	};

	let mut rewritten = String::with_capacity(image_url.len() - range.len() + filename.len());
	rewritten.push_str(&image_url[..range.start]);
	rewritten.push_str(filename);
	rewritten.push_str(&image_url[range.end..]);
	rewritten
}

fn segment_range(image_url: &str) -> Option<Range<usize>> {
	let end = image_url.trim_end_matches(SEPARATORS).len();
	if end == 0 {
		return None;
	}

	let start = image_url[..end].rfind(SEPARATORS).map_or(0, |idx| idx + 1);
	Some(start..end)
}
